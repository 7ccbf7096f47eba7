//! Prints the category predicates for a few sample hands.

use pokerhands::{
    Card, CardError, classify, flush, four_of_a_kind, full_house, one_pair, straight,
    straight_flush, three_of_a_kind, two_pair,
};

fn hand(cards: &[(u8, &str)]) -> Result<Vec<Card>, CardError> {
    cards
        .iter()
        .map(|&(rank, suit)| Card::parse(rank, suit))
        .collect()
}

fn main() -> Result<(), Box<dyn core::error::Error>> {
    let samples = [
        hand(&[(5, "❤︎"), (8, "♠︎"), (8, "♣︎"), (11, "❤︎"), (1, "❤︎")])?,
        hand(&[(5, "❤︎"), (6, "♠︎"), (8, "♣︎"), (11, "❤︎"), (1, "❤︎")])?,
        hand(&[(5, "❤︎"), (6, "♠︎"), (6, "♣︎"), (11, "❤︎"), (6, "❤︎")])?,
        hand(&[(7, "❤︎"), (7, "♠︎"), (13, "❤︎"), (7, "♣︎"), (7, "♦︎")])?,
        hand(&[(7, "❤︎"), (8, "♠︎"), (13, "❤︎"), (7, "♣︎"), (7, "♦︎")])?,
        hand(&[(7, "❤︎"), (8, "❤︎"), (8, "♠︎"), (7, "♣︎"), (7, "♦︎")])?,
    ];

    for cards in &samples {
        println!("{}", "*".repeat(10));
        let shown: Vec<String> = cards.iter().map(ToString::to_string).collect();
        println!("{}", shown.join(" "));
        println!("one pair:        {}", one_pair(cards)?);
        println!("two pair:        {}", two_pair(cards)?);
        println!("three of a kind: {}", three_of_a_kind(cards)?);
        println!("straight:        {}", straight(cards)?);
        println!("flush:           {}", flush(cards)?);
        println!("full house:      {}", full_house(cards)?);
        println!("four of a kind:  {}", four_of_a_kind(cards)?);
        println!("straight flush:  {}", straight_flush(cards)?);
        println!("category:        {}", classify(cards)?);
    }

    Ok(())
}
