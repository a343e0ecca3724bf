use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{OtpError, Result};
use crate::utils::decode_secret;
use crate::writer::OutErr;

/// Named secrets, decoded once when loaded and read on every refresh.
///
/// Entries are kept sorted by name so each printed block has a stable order.
#[derive(Debug, Default)]
pub struct ProviderRegistry {
    providers: BTreeMap<String, Vec<u8>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        ProviderRegistry {
            providers: BTreeMap::new(),
        }
    }

    /// Load providers from `path`, or from standard input when no path is given.
    pub fn from_source<W>(path: Option<&Path>, writer: &mut W) -> Result<Self>
    where
        W: OutErr,
    {
        match path {
            Some(path) => {
                let file = File::open(path).map_err(|source| OtpError::Open {
                    path: path.to_path_buf(),
                    source,
                })?;
                tracing::debug!(path = %path.display(), "reading providers from file");
                Self::parse(BufReader::new(file), writer)
            }
            None => {
                tracing::debug!("reading providers from stdin");
                Self::parse(io::stdin().lock(), writer)
            }
        }
    }

    /// Parse `<name>\t<secret>` lines.
    ///
    /// Lines without exactly two tab separated fields are reported and skipped.
    /// An input with no usable line is an error.
    pub fn parse<R, W>(reader: R, writer: &mut W) -> Result<Self>
    where
        R: BufRead,
        W: OutErr,
    {
        let mut registry = ProviderRegistry::new();

        for raw in reader.split(b'\n') {
            let mut raw = raw?;
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }
            let line = match String::from_utf8(raw) {
                Ok(line) => line,
                Err(err) => {
                    let lossy = String::from_utf8_lossy(err.as_bytes());
                    writer.write_err(&format!("invalid line: {:?}, ignoring\n", lossy));
                    continue;
                }
            };
            let parts: Vec<&str> = line.split('\t').collect();
            match parts.as_slice() {
                [name, secret] => {
                    registry.insert(name.to_string(), secret, writer);
                }
                _ => writer.write_err(&format!("invalid line: {:?}, ignoring\n", line)),
            }
        }

        if registry.is_empty() {
            return Err(OtpError::NoProviders);
        }

        tracing::info!(providers = registry.len(), "loaded providers");
        Ok(registry)
    }

    /// Add a provider, replacing any earlier one with the same name.
    ///
    /// Secrets that are not valid base32 are kept as their raw text bytes.
    pub fn insert<W>(&mut self, name: String, encoded: &str, writer: &mut W) -> Option<Vec<u8>>
    where
        W: OutErr,
    {
        let secret = match decode_secret(encoded) {
            Ok(decoded) => decoded,
            Err(err) => {
                writer.write_err(&format!("decoding failed: {:?} ({})\n", err.to_string(), name));
                encoded.as_bytes().to_vec()
            }
        };

        let previous = self.providers.insert(name, secret);
        if previous.is_some() {
            tracing::debug!("provider replaced by a later entry");
        }
        previous
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.providers.get(name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.providers
            .iter()
            .map(|(name, secret)| (name.as_str(), secret.as_slice()))
    }
}
