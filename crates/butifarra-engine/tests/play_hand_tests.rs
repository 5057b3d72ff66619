use butifarra_core::{Card, CardSet, Contrada, Deck, GameMode, GameVariant, Suit};
use butifarra_engine::testing::TestModel;
use butifarra_engine::{
    play_hand, CantarInput, CantarOutput, ContrarInput, ContrarOutput, EngineError, Model,
    PlayHandInput, PlayInput, PlayOutput, ProtocolError, Score,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

/// Always plays the first legal card and never escalates.
struct FirstLegal {
    cantar: CantarOutput,
}

impl FirstLegal {
    fn new(cantar: CantarOutput) -> Self {
        Self { cantar }
    }
}

impl Model for FirstLegal {
    fn cantar(&mut self, _input: &CantarInput) -> CantarOutput {
        self.cantar
    }

    fn contrar(&mut self, _input: &ContrarInput) -> ContrarOutput {
        ContrarOutput { contrar: false }
    }

    fn play(&mut self, input: &PlayInput) -> PlayOutput {
        let legal = input.legal_plays().expect("a non-empty hand was offered");
        PlayOutput {
            card: legal.cards()[0],
            was_forced: legal.forced(),
        }
    }
}

fn shuffled_hands(seed: u64) -> [CardSet; 4] {
    let mut deck = Deck::new();
    let mut rng = StdRng::seed_from_u64(seed);
    deck.shuffle(&mut rng);
    deck.deal().expect("a fresh deck is full")
}

fn run_hand(
    seed: u64,
    player_c: u8,
    cantar: CantarOutput,
    variant: GameVariant,
) -> butifarra_engine::PlayHandOutput {
    let input = PlayHandInput::new(
        shuffled_hands(seed),
        Score::new(0, 0).unwrap(),
        player_c,
        variant,
    )
    .unwrap();
    let mut m0 = FirstLegal::new(cantar);
    let mut m1 = FirstLegal::new(cantar);
    let mut m2 = FirstLegal::new(cantar);
    let mut m3 = FirstLegal::new(cantar);
    let mut players: [&mut dyn Model; 4] = [&mut m0, &mut m1, &mut m2, &mut m3];
    play_hand(&input, &mut players).unwrap()
}

#[test]
fn test_a_butifarra_hand_consumes_all_48_cards_exactly_once() {
    for seed in 0..8 {
        let output = run_hand(seed, (seed % 4) as u8, CantarOutput::Butifarra, GameVariant::Libre);
        let history = output.history();
        assert_eq!(history.len(), 12);

        let seen: HashSet<Card> = history.cards().copied().collect();
        assert_eq!(seen.len(), 48);

        let total: u32 = history.cards().map(|c| u32::from(c.points())).sum();
        assert_eq!(total, 60);
    }
}

#[test]
fn test_every_baza_is_led_by_the_previous_winner() {
    let output = run_hand(3, 1, CantarOutput::Butifarra, GameVariant::Libre);
    let bazas = output.history().bazas();
    for pair in bazas.windows(2) {
        assert_eq!(
            pair[1].initial_player(),
            pair[0].winner(GameMode::Butifarra).unwrap()
        );
    }
    // player_c = 1, not delegated: seat 2 opens the hand.
    assert_eq!(bazas[0].initial_player(), 2);
}

#[test]
fn test_triumph_hands_complete_in_both_variants() {
    for variant in GameVariant::ALL {
        for seed in 0..4 {
            let output = run_hand(
                seed,
                0,
                CantarOutput::Triumph(Suit::Espadas),
                variant,
            );
            assert_eq!(output.history().len(), 12);
        }
    }
}

/// Records every contrar question it is asked, escalating up to a fixed
/// level, and otherwise plays like [`FirstLegal`].
struct Escalating {
    cantar: Option<CantarOutput>,
    level: Contrada,
    asked: Vec<(Contrada, u8)>,
}

impl Escalating {
    fn new(level: Contrada) -> Self {
        Self {
            cantar: None,
            level,
            asked: Vec::new(),
        }
    }

    fn bidding(mut self, cantar: CantarOutput) -> Self {
        self.cantar = Some(cantar);
        self
    }
}

impl Model for Escalating {
    fn cantar(&mut self, _input: &CantarInput) -> CantarOutput {
        self.cantar.unwrap_or(CantarOutput::Delegate)
    }

    fn contrar(&mut self, input: &ContrarInput) -> ContrarOutput {
        self.asked.push((input.contrada(), input.player()));
        ContrarOutput {
            contrar: input.contrada() < self.level,
        }
    }

    fn play(&mut self, input: &PlayInput) -> PlayOutput {
        let legal = input.legal_plays().expect("a non-empty hand was offered");
        PlayOutput {
            card: legal.cards()[0],
            was_forced: legal.forced(),
        }
    }
}

#[test]
fn test_the_contrada_ladder_alternates_between_the_sides() {
    let input = PlayHandInput::new(
        shuffled_hands(11),
        Score::new(40, 60).unwrap(),
        0,
        GameVariant::Libre,
    )
    .unwrap();
    let mut m0 = Escalating::new(Contrada::Recontrada).bidding(CantarOutput::Triumph(Suit::Bastos));
    let mut m1 = Escalating::new(Contrada::SantVicentada);
    let mut m2 = Escalating::new(Contrada::Normal);
    let mut m3 = Escalating::new(Contrada::Normal);
    {
        let mut players: [&mut dyn Model; 4] = [&mut m0, &mut m1, &mut m2, &mut m3];
        play_hand(&input, &mut players).unwrap();
    }

    // The defender left of the bidder speaks at the even levels, the bidder
    // at the odd one; the ladder tops out at SANT_VICENTADA.
    assert_eq!(m1.asked, vec![(Contrada::Normal, 3), (Contrada::Recontrada, 3)]);
    assert_eq!(m0.asked, vec![(Contrada::Contrada, 0)]);
    assert!(m2.asked.is_empty());
    assert!(m3.asked.is_empty());
}

#[test]
fn test_a_declined_contrar_stops_the_ladder() {
    let input = PlayHandInput::new(
        shuffled_hands(12),
        Score::new(0, 0).unwrap(),
        2,
        GameVariant::Libre,
    )
    .unwrap();
    let mut m0 = Escalating::new(Contrada::Normal);
    let mut m1 = Escalating::new(Contrada::Normal);
    let mut m2 = Escalating::new(Contrada::Normal).bidding(CantarOutput::Butifarra);
    let mut m3 = Escalating::new(Contrada::Normal);
    {
        let mut players: [&mut dyn Model; 4] = [&mut m0, &mut m1, &mut m2, &mut m3];
        play_hand(&input, &mut players).unwrap();
    }

    // Seat 3 declines immediately and nobody else is consulted.
    assert_eq!(m3.asked, vec![(Contrada::Normal, 3)]);
    assert!(m0.asked.is_empty());
    assert!(m1.asked.is_empty());
    assert!(m2.asked.is_empty());
}

/// Ignores the legal set entirely and keeps naming the same card.
struct Stubborn {
    card: Card,
}

impl Model for Stubborn {
    fn cantar(&mut self, _input: &CantarInput) -> CantarOutput {
        CantarOutput::Butifarra
    }

    fn contrar(&mut self, _input: &ContrarInput) -> ContrarOutput {
        ContrarOutput { contrar: false }
    }

    fn play(&mut self, _input: &PlayInput) -> PlayOutput {
        PlayOutput {
            card: self.card,
            was_forced: false,
        }
    }
}

#[test]
fn test_a_card_outside_the_legal_set_aborts_the_hand() {
    let hands = [
        CardSet::new((1..=12).map(|n| Card::new(n, Suit::Oros).unwrap()).collect::<Vec<_>>())
            .unwrap(),
        CardSet::new((1..=12).map(|n| Card::new(n, Suit::Bastos).unwrap()).collect::<Vec<_>>())
            .unwrap(),
        CardSet::new((1..=12).map(|n| Card::new(n, Suit::Copas).unwrap()).collect::<Vec<_>>())
            .unwrap(),
        CardSet::new((1..=12).map(|n| Card::new(n, Suit::Espadas).unwrap()).collect::<Vec<_>>())
            .unwrap(),
    ];
    let input = PlayHandInput::new(
        hands,
        Score::new(0, 0).unwrap(),
        0,
        GameVariant::Libre,
    )
    .unwrap();

    // Seat 2 keeps claiming a card from seat 3's hand.
    let mut m0 = FirstLegal::new(CantarOutput::Butifarra);
    let mut m1 = FirstLegal::new(CantarOutput::Butifarra);
    let mut m2 = Stubborn {
        card: Card::new(5, Suit::Espadas).unwrap(),
    };
    let mut m3 = FirstLegal::new(CantarOutput::Butifarra);
    let mut players: [&mut dyn Model; 4] = [&mut m0, &mut m1, &mut m2, &mut m3];

    let result = play_hand(&input, &mut players);
    assert_eq!(
        result,
        Err(EngineError::Protocol(ProtocolError::IllegalCard {
            seat: 2,
            card: Card::new(5, Suit::Espadas).unwrap(),
        }))
    );
}

#[test]
fn test_an_unsupported_variant_fails_before_any_strategy_call() {
    struct LibreOnly(FirstLegal);
    impl Model for LibreOnly {
        fn cantar(&mut self, input: &CantarInput) -> CantarOutput {
            self.0.cantar(input)
        }
        fn contrar(&mut self, input: &ContrarInput) -> ContrarOutput {
            self.0.contrar(input)
        }
        fn play(&mut self, input: &PlayInput) -> PlayOutput {
            self.0.play(input)
        }
        fn supports(&self, variant: GameVariant) -> bool {
            variant == GameVariant::Libre
        }
    }

    let input = PlayHandInput::new(
        shuffled_hands(5),
        Score::new(0, 0).unwrap(),
        0,
        GameVariant::Obligada,
    )
    .unwrap();
    let mut m0 = FirstLegal::new(CantarOutput::Butifarra);
    let mut m1 = FirstLegal::new(CantarOutput::Butifarra);
    let mut m2 = LibreOnly(FirstLegal::new(CantarOutput::Butifarra));
    let mut m3 = FirstLegal::new(CantarOutput::Butifarra);
    let mut players: [&mut dyn Model; 4] = [&mut m0, &mut m1, &mut m2, &mut m3];

    let result = play_hand(&input, &mut players);
    assert_eq!(
        result,
        Err(EngineError::Protocol(ProtocolError::UnsupportedVariant {
            seat: 2,
            variant: GameVariant::Obligada,
        }))
    );
}

#[test]
fn test_scripted_models_reproduce_a_known_hand() {
    // Uniform suits, oros as triumph: seat 0 wins the opening baza with its
    // triumph and leads the rest of the hand.
    let hands = [
        CardSet::new((1..=12).map(|n| Card::new(n, Suit::Oros).unwrap()).collect::<Vec<_>>())
            .unwrap(),
        CardSet::new((1..=12).map(|n| Card::new(n, Suit::Bastos).unwrap()).collect::<Vec<_>>())
            .unwrap(),
        CardSet::new((1..=12).map(|n| Card::new(n, Suit::Copas).unwrap()).collect::<Vec<_>>())
            .unwrap(),
        CardSet::new((1..=12).map(|n| Card::new(n, Suit::Espadas).unwrap()).collect::<Vec<_>>())
            .unwrap(),
    ];
    let input = PlayHandInput::new(
        hands.clone(),
        Score::new(1, 10).unwrap(),
        0,
        GameVariant::Libre,
    )
    .unwrap();

    let mut m0 = TestModel::new(hands[0].cards().to_vec())
        .with_cantar(CantarOutput::Triumph(Suit::Oros));
    let mut m1 = TestModel::new(hands[1].cards().to_vec());
    let mut m2 = TestModel::new(hands[2].cards().to_vec());
    let mut m3 = TestModel::new(hands[3].cards().to_vec());
    let mut players: [&mut dyn Model; 4] = [&mut m0, &mut m1, &mut m2, &mut m3];

    let output = play_hand(&input, &mut players).unwrap();
    let bazas = output.history().bazas();
    assert_eq!(bazas[0].initial_player(), 1);
    for baza in &bazas[1..] {
        assert_eq!(baza.initial_player(), 0);
    }
}
