mod decompress;
mod process;

pub use decompress::*;
pub use process::*;

#[cfg(test)]
/// Used in testing to gzip envelope content into archive bytes
pub(crate) fn gzip(content: &[u8]) -> Vec<u8> {
    use std::io::Write;

    let mut encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(content).unwrap();
    encoder.finish().unwrap()
}
