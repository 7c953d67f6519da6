mod qr;

pub use qr::{RenderOptions, QR};

use std::borrow::Cow;

use tracing::debug;

use crate::common::{
    codec::{encode_text, pack, Payload},
    error::{QRError, QRResult},
    metadata::{ECLevel, Mode, Version},
    version_db::select_version,
};

pub struct QRBuilder<'a> {
    data: Cow<'a, [u8]>,
    version: Option<Version>,
    ec_level: ECLevel,
}

impl<'a> QRBuilder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data: Cow::Borrowed(data), version: None, ec_level: ECLevel::M }
    }

    /// Encodes `text` with one byte per character. Characters above U+00FF
    /// fail with [`QRError::InvalidChar`].
    pub fn from_text(text: &'a str) -> QRResult<Self> {
        Ok(Self { data: encode_text(text)?, version: None, ec_level: ECLevel::M })
    }

    pub fn data(&mut self, data: &'a [u8]) -> &mut Self {
        self.data = Cow::Borrowed(data);
        self
    }

    /// Fixes the version instead of picking the smallest that fits.
    pub fn version(&mut self, version: Version) -> &mut Self {
        self.version = Some(version);
        self
    }

    pub fn unset_version(&mut self) -> &mut Self {
        self.version = None;
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    pub fn metadata(&self) -> String {
        match self.version {
            Some(v) => format!("{{ Version: {}, Ec level: {} }}", *v, self.ec_level),
            None => format!("{{ Version: None, Ec level: {} }}", self.ec_level),
        }
    }
}


impl QRBuilder<'_> {
    pub fn build(&self) -> QRResult<QR> {
        debug!("Generating QR {}...", self.metadata());

        let payload = Payload::bytes(&self.data);
        let version = self.find_version(payload.len())?;

        debug!("Packing payload...");
        let bits = pack(&payload, version);

        debug!("Constructing QR...");
        let mut qr = QR::new(version, self.ec_level)?;

        debug!("Drawing finder patterns...");
        qr.draw_finder_patterns()?;

        debug!("Drawing data region...");
        let unfilled = qr.draw_data_region(bits)?;
        if unfilled > 0 {
            debug!(unfilled, "Payload exhausted before data region, modules left unassigned");
        }

        debug!(
            version = version.number(),
            size = version.size(),
            dark = qr.count_dark_modules(),
            "QR generated successfully"
        );
        Ok(qr)
    }

    fn find_version(&self, len: usize) -> QRResult<Version> {
        match self.version {
            Some(v) => {
                let max = v.capacity(Mode::Byte, self.ec_level);
                if len > max {
                    return Err(QRError::CapacityExceeded { required: len, max });
                }
                Ok(v)
            }
            None => {
                debug!("Finding best version...");
                select_version(len, Mode::Byte, self.ec_level)
            }
        }
    }
}
