//! Error handling and exit codes.

use bmicalc_core::constants::exit_codes;
use bmicalc_core::evaluator::BmiError;

/// Map an evaluation error to the appropriate exit code.
pub fn handle_error(err: &BmiError) -> i32 {
    match err {
        BmiError::InvalidInput => exit_codes::ERROR_INVALID_INPUT,
    }
}
