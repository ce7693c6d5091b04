use anyhow::{Result, bail};

/// Fixed mapping from map-size labels to the single byte that encodes
/// them in a map header. Labels are stored lower-case; lookups fold case.
pub const SIZE_CODES: &[(&str, u8)] = &[
    ("s", 0x24),
    ("m", 0x48),
    ("l", 0x6C),
    ("xl", 0x90),
    ("h", 0xB4),
    ("eh", 0xD8),
    ("g", 0xFC),
];

/// Size code for a label, if the label is known.
pub fn code_for(label: &str) -> Option<u8> {
    let label = label.to_ascii_lowercase();
    SIZE_CODES
        .iter()
        .find(|(name, _)| *name == label)
        .map(|&(_, code)| code)
}

/// The set of size codes one run is looking for.
#[derive(Debug, Clone)]
pub struct SizeFilter {
    codes: Vec<u8>,
}

impl SizeFilter {
    /// Parse a comma-separated label list (e.g. "s, XL ,h") into a filter.
    /// Any unknown label fails the whole parse, so a run never starts with
    /// a partially valid request.
    pub fn parse(list: &str) -> Result<Self> {
        let mut codes = Vec::new();
        for label in list.split(',') {
            let label = label.trim();
            match code_for(label) {
                Some(code) => codes.push(code),
                None => bail!("Incorrect map size: {label}"),
            }
        }
        Ok(Self { codes })
    }

    pub fn matches(&self, code: u8) -> bool {
        self.codes.contains(&code)
    }
}
