//! Face-dependent hairstyle lists.
//!
//! Furred clans restrict some hairstyles to particular faces. The feature
//! sheet tags such a hairstyle with `face + face_count`; untagged hairstyles
//! fit every face.

use vanity_common::Clan;
use vanity_sheets::FeatureLookup;

use crate::CustomizeOption;

/// Hairstyle lists indexed by face value.
///
/// Returns `face_count + 1` lists. Index 0, and every index of a clan that is
/// not furred, holds the full list.
pub fn hair_by_face(
    hairstyles: &[CustomizeOption],
    face_count: usize,
    clan: Clan,
    features: &dyn FeatureLookup,
) -> Vec<Vec<CustomizeOption>> {
    let mut lists = Vec::with_capacity(face_count + 1);
    lists.push(hairstyles.to_vec());

    for face in 1..=face_count {
        if !clan.is_furred() {
            lists.push(hairstyles.to_vec());
            continue;
        }
        let tag = face + face_count;
        lists.push(
            hairstyles
                .iter()
                .filter(|option| {
                    let face_tag = option
                        .key
                        .and_then(|key| features.feature(key))
                        .map_or(0, |feature| usize::from(feature.face_tag));
                    face_tag == 0 || face_tag == tag
                })
                .copied()
                .collect(),
        );
    }
    lists
}
