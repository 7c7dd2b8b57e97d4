use crate::Move;

impl quickcheck::Arbitrary for Move {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[Move::Rock, Move::Paper, Move::Scissors, Move::Bomb])
            .unwrap()
    }
}
