use crate::constant::NAME;
use colorize::AnsiColor;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum PackErrorCode {
    InputReadError,
    OutputWriteError,
    PayloadTooLarge,
}

// the size field is a u32; a payload the field cannot describe must be
// rejected, never truncated
pub fn checked_payload_size(len: usize) -> Result<u32, PackError> {
    match u32::try_from(len) {
        Ok(size) => Ok(size),
        Err(_) => Err(PackError {
            code: PackErrorCode::PayloadTooLarge,
            reason: format!(
                "payload is {len} bytes, larger than the {} bytes the size field can describe",
                u32::MAX
            ),
        }),
    }
}

pub struct PackError {
    pub code: PackErrorCode,
    pub reason: String,
}
impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = format!(
            "{NAME}: {} {} :: {}",
            "error:".to_string().red(),
            format!("{:?}", self.code).yellow(),
            self.reason
        );
        write!(f, "{string}")
    }
}
impl fmt::Debug for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}
