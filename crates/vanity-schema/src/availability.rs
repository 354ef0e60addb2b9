//! Which categories a clan and gender can customize.

use vanity_common::{Clan, CustomizeIndex};
use vanity_sheets::MenuRow;

use crate::{CategoryMap, ExtractedOptions};

/// Compute availability for every category.
pub fn compute_availability(
    clan: Clan,
    row: &MenuRow,
    extracted: &ExtractedOptions,
) -> CategoryMap<bool> {
    CategoryMap::from_fn(|category| is_available(category, clan, row, extracted))
}

fn is_available(category: CustomizeIndex, clan: Clan, row: &MenuRow, extracted: &ExtractedOptions) -> bool {
    use CustomizeIndex as C;
    match category {
        // Identity bytes are chosen elsewhere and never listed.
        C::Race | C::Gender | C::Clan | C::BodyType => false,
        C::Face => !extracted.faces.is_empty(),
        C::Eyebrows | C::EyeShape | C::Nose | C::Jaw | C::Mouth => row.menu_size(category) > 0,
        // Also ear size, tail length or bust size depending on the clan.
        C::MuscleMass | C::BustSize => row.menu_size(category) > 0,
        C::LipColor => !extracted.lip_colors_dark.is_empty(),
        C::TailShape => !extracted.tail_shapes.is_empty(),
        C::FacePaint | C::FacePaintColor | C::FacePaintReversed => !extracted.face_paints.is_empty(),
        C::Lipstick => !clan.is_furred(),
        C::Height
        | C::Hairstyle
        | C::Highlights
        | C::SkinColor
        | C::EyeColorRight
        | C::EyeColorLeft
        | C::HairColor
        | C::HighlightsColor
        | C::TattooColor
        | C::FacialFeature1
        | C::FacialFeature2
        | C::FacialFeature3
        | C::FacialFeature4
        | C::FacialFeature5
        | C::FacialFeature6
        | C::FacialFeature7
        | C::LegacyTattoo
        | C::SmallIris => true,
    }
}
