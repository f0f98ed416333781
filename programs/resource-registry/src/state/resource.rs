use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use std::fmt;
use std::str::FromStr;

use crate::errors::ResourceRegistryError;

/// Seed prefix for resource PDAs: ["resource", id.to_le_bytes()]
pub const RESOURCE_SEED: &[u8] = b"resource";
/// Seed prefix for update audit PDAs: ["resource-update", id.to_le_bytes()]
pub const RESOURCE_UPDATE_SEED: &[u8] = b"resource-update";

/// A registered content entry.
/// The hash, registration height and version ceiling never change after
/// creation; everything else is changed only through the partial-update
/// methods below.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Resource {
    /// Content fingerprint, unique across the registry
    pub hash: [u8; 32],
    #[max_len(100)]
    pub title: String,
    #[max_len(500)]
    pub description: String,
    #[max_len(200)]
    pub ipfs_link: String,
    pub owner: Pubkey,
    /// Block height (slot) at registration
    pub registered_at: u64,
    pub category: Category,
    /// true while active, cleared on deactivation
    pub status: bool,
    pub format: Format,
    pub visibility: bool,
    pub license: License,
    pub max_versions: u8,
    pub current_version: u8,
    /// Informational, never charged by the registry
    pub access_fee: u64,
}

impl Resource {
    pub fn is_active(&self) -> bool {
        self.status
    }

    /// Replace the mutable metadata and version. Nothing else is touched.
    pub fn apply_update(&mut self, title: &str, description: &str, ipfs_link: &str, version: u8) {
        self.title = title.to_string();
        self.description = description.to_string();
        self.ipfs_link = ipfs_link.to_string();
        self.current_version = version;
    }

    pub fn deactivate(&mut self) {
        self.status = false;
    }

    pub fn transfer_to(&mut self, new_owner: Pubkey) {
        self.owner = new_owner;
    }
}

/// Most recent metadata update for a resource. One slot per resource,
/// overwritten on every update.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct ResourceUpdate {
    #[max_len(100)]
    pub title: String,
    #[max_len(500)]
    pub description: String,
    #[max_len(200)]
    pub ipfs_link: String,
    pub updated_at: u64,
    pub updater: Pubkey,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum Category {
    Ebook,
    Article,
    Video,
    Audio,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum Format {
    Pdf,
    Epub,
    Mp4,
    Mp3,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum License {
    CcBy,
    CcBySa,
    PublicDomain,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Ebook,
        Category::Article,
        Category::Video,
        Category::Audio,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Ebook => "ebook",
            Category::Article => "article",
            Category::Video => "video",
            Category::Audio => "audio",
        }
    }
}

impl Format {
    pub const ALL: [Format; 4] = [Format::Pdf, Format::Epub, Format::Mp4, Format::Mp3];

    pub fn label(&self) -> &'static str {
        match self {
            Format::Pdf => "PDF",
            Format::Epub => "EPUB",
            Format::Mp4 => "MP4",
            Format::Mp3 => "MP3",
        }
    }
}

impl License {
    pub const ALL: [License; 3] = [License::CcBy, License::CcBySa, License::PublicDomain];

    pub fn label(&self) -> &'static str {
        match self {
            License::CcBy => "CC-BY",
            License::CcBySa => "CC-BY-SA",
            License::PublicDomain => "Public Domain",
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| error!(ResourceRegistryError::InvalidCategory))
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Format::ALL
            .into_iter()
            .find(|f| f.label() == s)
            .ok_or_else(|| error!(ResourceRegistryError::InvalidFormat))
    }
}

impl FromStr for License {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        License::ALL
            .into_iter()
            .find(|l| l.label() == s)
            .ok_or_else(|| error!(ResourceRegistryError::InvalidLicense))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back_to_their_variant() {
        for c in Category::ALL {
            assert_eq!(c.label().parse::<Category>().unwrap(), c);
        }
        for f in Format::ALL {
            assert_eq!(f.to_string().parse::<Format>().unwrap(), f);
        }
        assert_eq!("Public Domain".parse::<License>().unwrap(), License::PublicDomain);
        assert_eq!("CC-BY-SA".parse::<License>().unwrap(), License::CcBySa);
    }

    #[test]
    fn unknown_labels_are_rejected_with_field_errors() {
        let err = "invalid".parse::<Category>().unwrap_err();
        assert_eq!(err, ResourceRegistryError::InvalidCategory.into());
        let err = "pdf".parse::<Format>().unwrap_err();
        assert_eq!(err, ResourceRegistryError::InvalidFormat.into());
        let err = "MIT".parse::<License>().unwrap_err();
        assert_eq!(err, ResourceRegistryError::InvalidLicense.into());
    }
}
