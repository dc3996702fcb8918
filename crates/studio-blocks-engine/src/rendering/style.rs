//! Alignment inheritance and the lookup tables from authored settings to
//! CSS class names shared by every front end.

use crate::models::{
    Alignment, AlignmentSetting, Background, ButtonVariant, ColumnRatio, ShowOn, Spacing,
};

pub const DEFAULT_GRID_COLUMNS: u8 = 3;
pub const MAX_GRID_COLUMNS: u8 = 4;
pub const DEFAULT_GALLERY_COLUMNS: u8 = 3;

/// Effective alignment: an explicit setting wins, `Inherit` takes the
/// enclosing container's alignment.
pub fn resolve_alignment(setting: AlignmentSetting, inherited: Alignment) -> Alignment {
    match setting {
        AlignmentSetting::Inherit => inherited,
        AlignmentSetting::Left => Alignment::Left,
        AlignmentSetting::Center => Alignment::Center,
        AlignmentSetting::Right => Alignment::Right,
    }
}

pub fn alignment_class(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "align-left",
        Alignment::Center => "align-center",
        Alignment::Right => "align-right",
    }
}

/// Column widths in percent, left then right.
pub fn column_split(ratio: ColumnRatio) -> (u8, u8) {
    match ratio {
        ColumnRatio::Half => (50, 50),
        ColumnRatio::SixtyForty => (60, 40),
        ColumnRatio::FortySixty => (40, 60),
        ColumnRatio::SeventyThirty => (70, 30),
        ColumnRatio::ThirtySeventy => (30, 70),
    }
}

pub fn column_classes(ratio: ColumnRatio) -> (&'static str, &'static str) {
    match ratio {
        ColumnRatio::Half => ("col-50", "col-50"),
        ColumnRatio::SixtyForty => ("col-60", "col-40"),
        ColumnRatio::FortySixty => ("col-40", "col-60"),
        ColumnRatio::SeventyThirty => ("col-70", "col-30"),
        ColumnRatio::ThirtySeventy => ("col-30", "col-70"),
    }
}

/// Authored column count clamped to what the grid stylesheet supports.
pub fn grid_columns(columns: Option<u8>) -> u8 {
    columns
        .unwrap_or(DEFAULT_GRID_COLUMNS)
        .clamp(1, MAX_GRID_COLUMNS)
}

pub fn grid_class(columns: u8) -> &'static str {
    match columns {
        0 | 1 => "grid-cols-1",
        2 => "grid-cols-2",
        3 => "grid-cols-3",
        _ => "grid-cols-4",
    }
}

pub fn spacing_class(spacing: Spacing) -> &'static str {
    match spacing {
        Spacing::Small => "space-sm",
        Spacing::Medium => "space-md",
        Spacing::Large => "space-lg",
    }
}

pub fn button_class(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Primary => "button button-primary",
        ButtonVariant::Secondary => "button button-secondary",
        ButtonVariant::Outline => "button button-outline",
        ButtonVariant::Text => "button button-text",
    }
}

pub fn background_class(background: Background) -> &'static str {
    match background {
        Background::None => "bg-none",
        Background::Muted => "bg-muted",
        Background::Dark => "bg-dark",
    }
}

/// Classes hiding a responsive wrapper on the breakpoints it is not shown
/// on. Empty when it shows everywhere.
pub fn visibility_classes(show_on: ShowOn) -> String {
    [
        (show_on.mobile, "hide-mobile"),
        (show_on.tablet, "hide-tablet"),
        (show_on.desktop, "hide-desktop"),
    ]
    .into_iter()
    .filter(|(shown, _)| !shown)
    .map(|(_, class)| class)
    .collect::<Vec<_>>()
    .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AlignmentSetting::Inherit, Alignment::Center, Alignment::Center)]
    #[case(AlignmentSetting::Inherit, Alignment::Left, Alignment::Left)]
    #[case(AlignmentSetting::Right, Alignment::Center, Alignment::Right)]
    #[case(AlignmentSetting::Left, Alignment::Right, Alignment::Left)]
    fn test_resolve_alignment(
        #[case] setting: AlignmentSetting,
        #[case] inherited: Alignment,
        #[case] expected: Alignment,
    ) {
        assert_eq!(resolve_alignment(setting, inherited), expected);
    }

    #[test]
    fn test_column_splits_sum_to_hundred() {
        for ratio in [
            ColumnRatio::Half,
            ColumnRatio::SixtyForty,
            ColumnRatio::FortySixty,
            ColumnRatio::SeventyThirty,
            ColumnRatio::ThirtySeventy,
        ] {
            let (left, right) = column_split(ratio);
            assert_eq!(left + right, 100);
        }
    }

    #[rstest]
    #[case(None, 3)]
    #[case(Some(0), 1)]
    #[case(Some(2), 2)]
    #[case(Some(9), 4)]
    fn test_grid_columns(#[case] authored: Option<u8>, #[case] expected: u8) {
        assert_eq!(grid_columns(authored), expected);
    }

    #[test]
    fn test_visibility_classes() {
        assert_eq!(visibility_classes(ShowOn::default()), "");
        let desktop_only = ShowOn {
            mobile: false,
            tablet: false,
            desktop: true,
        };
        assert_eq!(visibility_classes(desktop_only), "hide-mobile hide-tablet");
    }
}
