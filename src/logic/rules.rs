// src/logic/rules.rs

use crate::components::card::Card;

/// 2枚のカードがペアになるか判定するよ！
///
/// 同じ動物 (pair_id が同じ) で、しかも言語が違うときだけ true。
/// 英語カード同士みたいに言語が同じなら、同じ動物でもハズレ。
pub fn is_match(first: &Card, second: &Card) -> bool {
    first.pair_id == second.pair_id && first.variant != second.variant
}

/// 全部のカードがそろったか。
///
/// 空のデッキは「クリア」とは言わないよ。
pub fn is_deck_cleared(matched_count: usize, deck_len: usize) -> bool {
    deck_len > 0 && matched_count == deck_len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::LanguageVariant;

    fn cat_en() -> Card {
        Card::new(1, LanguageVariant::English, "Cat", "🐱")
    }

    #[test]
    fn same_animal_different_language_matches() {
        let cat_local = Card::new(1, LanguageVariant::Local, "猫", "🐱");
        assert!(is_match(&cat_en(), &cat_local));
        assert!(is_match(&cat_local, &cat_en()), "順番は関係ない");
    }

    #[test]
    fn different_animals_do_not_match() {
        let dog_en = Card::new(2, LanguageVariant::English, "Dog", "🐶");
        let dog_local = Card::new(2, LanguageVariant::Local, "狗", "🐶");
        assert!(!is_match(&cat_en(), &dog_en));
        assert!(!is_match(&cat_en(), &dog_local));
    }

    #[test]
    fn same_language_does_not_match() {
        assert!(!is_match(&cat_en(), &cat_en()));
    }

    #[test]
    fn deck_cleared_only_when_everything_matched() {
        assert!(is_deck_cleared(16, 16));
        assert!(!is_deck_cleared(14, 16));
        assert!(!is_deck_cleared(0, 0));
    }
}
