//! Noun-phrase extraction by greedy chunk merging over tagged tokens.
//!
//! Adjacent chunks merge by these rules until nothing changes:
//! proper+proper → proper, noun+noun → group, group+noun → group, adj+adj → adj, adj+noun → group.
//! The result is every proper-noun or noun-group chunk, lowercased. A lone common noun is not a phrase.

use crate::tagger::{PosTag, TaggedToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChunkKind {
    Proper,
    Noun,
    Group,
    Adjective,
    Other,
}

impl From<PosTag> for ChunkKind {
    fn from(tag: PosTag) -> Self {
        match tag {
            PosTag::ProperNoun => ChunkKind::Proper,
            PosTag::Noun => ChunkKind::Noun,
            PosTag::Adjective => ChunkKind::Adjective,
            _ => ChunkKind::Other,
        }
    }
}

fn merge(left: ChunkKind, right: ChunkKind) -> Option<ChunkKind> {
    match (left, right) {
        (ChunkKind::Proper, ChunkKind::Proper) => Some(ChunkKind::Proper),
        (ChunkKind::Noun, ChunkKind::Noun) => Some(ChunkKind::Group),
        (ChunkKind::Group, ChunkKind::Noun) => Some(ChunkKind::Group),
        (ChunkKind::Adjective, ChunkKind::Adjective) => Some(ChunkKind::Adjective),
        (ChunkKind::Adjective, ChunkKind::Noun) => Some(ChunkKind::Group),
        _ => None,
    }
}

/// Extracts noun phrases from tagged tokens, in order of appearance.
pub fn extract_noun_phrases(tokens: &[TaggedToken]) -> Vec<String> {
    let mut chunks: Vec<(String, ChunkKind)> = tokens
        .iter()
        .map(|t| (t.word.clone(), ChunkKind::from(t.tag)))
        .collect();

    loop {
        let mut merged_any = false;
        let mut i = 0;
        while i + 1 < chunks.len() {
            if let Some(kind) = merge(chunks[i].1, chunks[i + 1].1) {
                let (right, _) = chunks.remove(i + 1);
                let left = &mut chunks[i];
                left.0.push(' ');
                left.0.push_str(&right);
                left.1 = kind;
                merged_any = true;
            } else {
                i += 1;
            }
        }
        if !merged_any {
            break;
        }
    }

    chunks
        .into_iter()
        .filter(|(_, kind)| matches!(kind, ChunkKind::Proper | ChunkKind::Group))
        .map(|(text, _)| text.to_lowercase())
        .collect()
}
