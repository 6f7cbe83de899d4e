// src/logic/deck.rs

use std::collections::HashMap;

use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::card::{Card, LanguageVariant};
use crate::config::AnimalEntry;

/// 動物のリストからペアのデッキを作る関数だよ！🃏
///
/// 1匹につき英語カードとローカル言語カードの2枚。全部裏向きで、並びは動物リストの順のまま。
/// シャッフルは `shuffle_deck` でやってね。
pub fn create_pair_deck(animals: &[AnimalEntry]) -> Vec<Card> {
    let mut deck = Vec::with_capacity(animals.len() * 2);
    for animal in animals {
        deck.push(Card::new(animal.id, LanguageVariant::English, animal.english_name.as_str(), animal.icon.as_str()));
        deck.push(Card::new(animal.id, LanguageVariant::Local, animal.local_name.as_str(), animal.icon.as_str()));
    }
    deck
}

/// デッキをシャッフルするよ。
///
/// `SliceRandom::shuffle` は Fisher–Yates (後ろから順に、0..=i の一様な位置と入れ替え) なので、
/// 乱数が一様なら全部の並びが同じ確率で出る。
/// 乱数生成器は引数でもらうので、テストではシード固定の StdRng を渡せる！
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// デッキを pair_id ごとにグループ分けするよ。
pub fn group_by_pair(deck: &[Card]) -> HashMap<u32, Vec<&Card>> {
    deck.iter().into_group_map_by(|card| card.pair_id)
}

/// デッキがちゃんとペアになってるかチェック。
///
/// どの pair_id もちょうど2枚で、English と Local が1枚ずつ、絵文字も同じ。
pub fn is_well_formed(deck: &[Card]) -> bool {
    group_by_pair(deck).values().all(|cards| match cards.as_slice() {
        [a, b] => a.variant != b.variant && a.icon == b.icon,
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::CardState;
    use crate::config::default_animals;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn deck_has_sixteen_cards() {
        let deck = create_pair_deck(&default_animals());
        assert_eq!(deck.len(), 16, "8匹 × 2枚 = 16枚のはず！");
    }

    #[test]
    fn every_pair_has_one_card_per_language() {
        let deck = create_pair_deck(&default_animals());
        let groups = group_by_pair(&deck);
        assert_eq!(groups.len(), 8);

        for animal in default_animals() {
            let cards = &groups[&animal.id];
            let english: Vec<_> = cards.iter().filter(|c| c.variant == LanguageVariant::English).collect();
            let local: Vec<_> = cards.iter().filter(|c| c.variant == LanguageVariant::Local).collect();
            assert_eq!(english.len(), 1, "{} の英語カードは1枚だけ", animal.english_name);
            assert_eq!(local.len(), 1, "{} のローカルカードは1枚だけ", animal.english_name);
            assert_eq!(english[0].display_text, animal.english_name);
            assert_eq!(local[0].display_text, animal.local_name);
            assert_eq!(english[0].icon, local[0].icon);
        }
        assert!(is_well_formed(&deck));
    }

    #[test]
    fn new_deck_is_all_hidden() {
        let deck = create_pair_deck(&default_animals());
        assert!(deck.iter().all(|card| card.state == CardState::Hidden));
    }

    #[test]
    fn shuffle_keeps_the_same_cards() {
        let unshuffled = create_pair_deck(&default_animals());
        let mut shuffled = unshuffled.clone();
        let mut rng = StdRng::seed_from_u64(7);
        shuffle_deck(&mut shuffled, &mut rng);

        // 並びだけ変わって、中身の集合は同じ
        let sort_key = |c: &Card| (c.pair_id, c.variant == LanguageVariant::Local);
        let mut a = unshuffled.clone();
        let mut b = shuffled.clone();
        a.sort_by_key(sort_key);
        b.sort_by_key(sort_key);
        assert_eq!(a, b);
        assert!(is_well_formed(&shuffled));
    }

    #[test]
    fn shuffle_changes_order() {
        let unshuffled = create_pair_deck(&default_animals());
        let mut shuffled = unshuffled.clone();
        let mut rng = StdRng::seed_from_u64(2024);
        shuffle_deck(&mut shuffled, &mut rng);
        // 16! 通りのうち元と同じ並びになることはまずない
        assert_ne!(unshuffled, shuffled);
    }

    #[test]
    fn same_seed_gives_same_order() {
        let mut first = create_pair_deck(&default_animals());
        let mut second = first.clone();
        shuffle_deck(&mut first, &mut StdRng::seed_from_u64(99));
        shuffle_deck(&mut second, &mut StdRng::seed_from_u64(99));
        assert_eq!(first, second);
    }

    #[test]
    fn broken_decks_are_detected() {
        let mut deck = create_pair_deck(&default_animals());
        // 1枚抜くと、その pair_id は1枚だけになる
        deck.pop();
        assert!(!is_well_formed(&deck));

        let mut same_variant = create_pair_deck(&default_animals());
        same_variant[1].variant = LanguageVariant::English;
        assert!(!is_well_formed(&same_variant));
    }
}
