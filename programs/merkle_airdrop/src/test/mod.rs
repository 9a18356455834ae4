pub mod test_eligibility;

use anchor_lang::error::Error;

/// Error code carried by an anchor error, for comparing against `AirdropError`.
pub(crate) fn error_code(err: &Error) -> u32 {
    match err {
        Error::AnchorError(anchor_error) => anchor_error.error_code_number,
        Error::ProgramError(_) => u32::MAX,
    }
}
