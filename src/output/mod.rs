// mod.rs - Terminal escape sequence framing

use std::io::Write;

use log::trace;

use crate::error::{DropError, Result};

/// Operating system command 51 introducer: ESC ] 51 ;
pub const OSC_PREFIX: &[u8] = b"\x1b]51;";

/// Sequence terminator (BEL)
pub const OSC_TERMINATOR: &[u8] = b"\x07";

/// Wrap a JSON payload in the OSC 51 frame. No trailing newline.
pub fn frame_message(json: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(OSC_PREFIX.len() + json.len() + OSC_TERMINATOR.len());
    frame.extend_from_slice(OSC_PREFIX);
    frame.extend_from_slice(json);
    frame.extend_from_slice(OSC_TERMINATOR);
    frame
}

/// Write the complete frame in one go and flush
pub fn write_message<W: Write>(writer: &mut W, json: &[u8]) -> Result<()> {
    let frame = frame_message(json);
    trace!("writing {} byte OSC 51 frame", frame.len());

    writer.write_all(&frame).map_err(DropError::Output)?;
    writer.flush().map_err(DropError::Output)?;
    Ok(())
}
