pub const NAME: &str = "csa-pack";

pub const MAGIC: u32 = 0xC0DE_FACE;
pub const LOAD_ADDRESS: u32 = 0x0020_0000;
pub const HEADER_SIZE: usize = size_of::<u32>() * 3;

pub const DEFAULT_PAYLOAD_NAME: &str = "payload.bin";
pub const DEFAULT_IMAGE_NAME: &str = "program.csa";

// the serial-side CSA loader rejects anything past this
pub const LOADER_MAX_PAYLOAD: usize = 65536;
