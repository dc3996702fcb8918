//! Small enumerated presentation settings that editors pick from fixed lists.

use serde::Deserialize;

/// Horizontal alignment requested by a block. `Inherit` defers to the
/// enclosing container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentSetting {
    #[default]
    Inherit,
    Left,
    Center,
    Right,
}

/// Effective alignment after inheritance has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    Small,
    #[default]
    Medium,
    Large,
}

/// Proportion between the two slots of a two-column layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum ColumnRatio {
    #[default]
    #[serde(rename = "50/50")]
    Half,
    #[serde(rename = "60/40")]
    SixtyForty,
    #[serde(rename = "40/60")]
    FortySixty,
    #[serde(rename = "70/30")]
    SeventyThirty,
    #[serde(rename = "30/70")]
    ThirtySeventy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    #[default]
    None,
    Muted,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageWidth {
    #[default]
    Contained,
    Full,
}

/// Which breakpoints a responsive wrapper shows its content on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShowOn {
    pub mobile: bool,
    pub tablet: bool,
    pub desktop: bool,
}

impl Default for ShowOn {
    fn default() -> Self {
        Self {
            mobile: true,
            tablet: true,
            desktop: true,
        }
    }
}

impl ShowOn {
    pub fn any(&self) -> bool {
        self.mobile || self.tablet || self.desktop
    }
}
