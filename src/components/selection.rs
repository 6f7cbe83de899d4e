// src/components/selection.rs

use crate::ecs::component::Component;
use crate::ecs::entity::Entity;

/// 今めくられていて、まだ判定が終わってないカード (0〜2枚) だよ。
///
/// セッションのエンティティに1つだけ付く。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub first: Option<Entity>,
    pub second: Option<Entity>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.first.is_none() && self.second.is_none()
    }

    pub fn clear(&mut self) {
        *self = Selection::default();
    }
}

impl Component for Selection {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_tracks_and_clears_picks() {
        let mut selection = Selection::default();
        assert!(selection.is_empty());

        selection.first = Some(Entity(3));
        assert!(!selection.is_empty());
        selection.second = Some(Entity(5));
        assert_eq!(selection, Selection { first: Some(Entity(3)), second: Some(Entity(5)) });

        selection.clear();
        assert!(selection.is_empty());
    }
}
