use crate::constant::{HEADER_SIZE, LOAD_ADDRESS, LOADER_MAX_PAYLOAD, MAGIC};
use crate::data::{checked_payload_size, PackError, PackErrorCode};
use std::{fs, fs::File, io::Write};

/// Builds a CSA image: 12 byte header (magic, load address, payload size,
/// each u32 little-endian) followed by the payload verbatim.
pub fn package(payload: &[u8]) -> Result<Vec<u8>, PackError> {
    let size = checked_payload_size(payload.len())?;
    let mut image = Vec::<u8>::with_capacity(HEADER_SIZE + payload.len());

    image.extend(MAGIC.to_le_bytes());
    image.extend(LOAD_ADDRESS.to_le_bytes());
    image.extend(size.to_le_bytes());
    image.extend_from_slice(payload);
    Ok(image)
}

pub fn exceeds_loader_limit(payload_len: usize) -> bool {
    payload_len > LOADER_MAX_PAYLOAD
}

pub fn read_payload(input_file: &str) -> Result<Vec<u8>, PackError> {
    match fs::read(input_file) {
        Ok(payload) => Ok(payload),
        Err(err) => Err(PackError {
            code: PackErrorCode::InputReadError,
            reason: format!("error reading file {input_file} :: {err}"),
        }),
    }
}

pub fn write_image(image: &[u8], output_file: &str) -> Result<(), PackError> {
    let mut outf = match File::create(output_file) {
        Ok(f) => f,
        Err(err) => {
            return Err(PackError {
                code: PackErrorCode::OutputWriteError,
                reason: format!("error opening file {output_file} :: {err}"),
            })
        }
    };
    match outf.write_all(image) {
        Ok(()) => Ok(()),
        Err(err) => {
            // don't leave a truncated image behind
            drop(outf);
            let _ = fs::remove_file(output_file);
            Err(PackError {
                code: PackErrorCode::OutputWriteError,
                reason: format!("error writing to file {output_file} :: {err}"),
            })
        }
    }
}
