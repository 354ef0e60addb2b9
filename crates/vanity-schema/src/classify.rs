//! Presentation kinds of categories.

use vanity_common::CustomizeIndex;
use vanity_sheets::MenuRow;

use crate::PresentationKind;

/// Kinds that do not depend on the menu row.
pub const fn fixed_kind(category: CustomizeIndex) -> Option<PresentationKind> {
    use CustomizeIndex as C;
    match category {
        C::HighlightsColor | C::EyeColorLeft | C::EyeColorRight | C::FacePaintColor => {
            Some(PresentationKind::ColorPicker)
        }
        C::BodyType => Some(PresentationKind::None),
        C::FacePaintReversed | C::Highlights | C::SmallIris | C::Lipstick => {
            Some(PresentationKind::Checkbox)
        }
        C::FacialFeature1
        | C::FacialFeature2
        | C::FacialFeature3
        | C::FacialFeature4
        | C::FacialFeature5
        | C::FacialFeature6
        | C::FacialFeature7
        | C::LegacyTattoo => Some(PresentationKind::IconCheckbox),
        _ => None,
    }
}

/// Decide how `category` is presented for this row.
///
/// Fixed kinds win; otherwise the sub-menu's kind byte decides, defaulting to
/// a list. Tail shapes never wrap into columns since their icons are large.
pub fn classify(category: CustomizeIndex, row: &MenuRow) -> PresentationKind {
    if let Some(kind) = fixed_kind(category) {
        return kind;
    }

    let kind = row
        .menu(category)
        .map_or(PresentationKind::List, |m| PresentationKind::from_menu_byte(m.kind));

    match (category, kind) {
        (CustomizeIndex::TailShape, PresentationKind::List) => PresentationKind::SingleColumnList,
        _ => kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vanity_common::{Clan, Gender};
    use vanity_sheets::SubMenu;

    #[test]
    fn test_fixed_kinds_ignore_row() {
        // The row claims eye colors are a plain list; the override wins.
        let row = MenuRow::new(Clan::Midlander, Gender::Male)
            .with_menu(SubMenu::sized(1, CustomizeIndex::EyeColorRight, 0, 10))
            .with_menu(SubMenu::sized(2, CustomizeIndex::Lipstick, 2, 2));

        assert_eq!(classify(CustomizeIndex::EyeColorRight, &row), PresentationKind::ColorPicker);
        assert_eq!(classify(CustomizeIndex::Lipstick, &row), PresentationKind::Checkbox);
        assert_eq!(classify(CustomizeIndex::BodyType, &row), PresentationKind::None);
        assert_eq!(classify(CustomizeIndex::LegacyTattoo, &row), PresentationKind::IconCheckbox);
    }

    #[test]
    fn test_row_kinds_and_default() {
        let row = MenuRow::new(Clan::Midlander, Gender::Male)
            .with_menu(SubMenu::sized(1, CustomizeIndex::SkinColor, 2, 192))
            .with_menu(SubMenu::sized(2, CustomizeIndex::Nose, 7, 3));

        assert_eq!(classify(CustomizeIndex::SkinColor, &row), PresentationKind::ColorPicker);
        assert_eq!(classify(CustomizeIndex::Nose, &row), PresentationKind::None);
        assert_eq!(classify(CustomizeIndex::Jaw, &row), PresentationKind::List);
    }

    #[test]
    fn test_tail_shape_is_single_column() {
        let with_menu = MenuRow::new(Clan::Raen, Gender::Female)
            .with_menu(SubMenu::sized(1, CustomizeIndex::TailShape, 1, 4));
        let without_menu = MenuRow::new(Clan::Midlander, Gender::Female);
        let hidden = MenuRow::new(Clan::Rava, Gender::Female)
            .with_menu(SubMenu::sized(1, CustomizeIndex::TailShape, 7, 4));

        assert_eq!(classify(CustomizeIndex::TailShape, &with_menu), PresentationKind::SingleColumnList);
        assert_eq!(classify(CustomizeIndex::TailShape, &without_menu), PresentationKind::SingleColumnList);
        assert_eq!(classify(CustomizeIndex::TailShape, &hidden), PresentationKind::None);
    }
}
