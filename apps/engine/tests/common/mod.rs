#![allow(dead_code)]

use wiezen_engine::ai::AiConfig;
use wiezen_engine::domain::tricks::legal_moves;
use wiezen_engine::{Bid, GameFlow, Phase, Seat};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    engine_test_support::logging::init();
}

/// Small trial count keeps Hard seats fast in tests.
pub fn test_config(seed: u64) -> AiConfig {
    AiConfig {
        mc_trials: 8,
        ..AiConfig::with_seed(seed)
    }
}

/// First seed at or after `from` whose opening deal goes to an auction
/// (no Troel), with the round already started.
pub fn flow_in_bidding(seats: [wiezen_engine::SeatConfig; 4], from: u64) -> GameFlow {
    for seed in from..from + 100 {
        let mut flow = GameFlow::new(seats, &test_config(seed));
        let phase = flow.start_round().expect("deal").phase;
        if phase == Phase::Bidding {
            return flow;
        }
    }
    panic!("no auction deal found in 100 seeds");
}

/// Take the simplest legal action for whichever seat must act: name the
/// longest suit as trump, pass every auction, play the lowest legal card.
pub fn act_for_next_seat(flow: &mut GameFlow) -> Seat {
    let seat = flow.next_actor().expect("someone must act");
    if flow.awaiting_trump().is_some() {
        let suit = flow.round().unwrap().hands[seat as usize][0].suit;
        flow.choose_trump(seat, suit).expect("trump");
        return seat;
    }
    let state = flow.round().expect("round");
    match state.phase {
        Phase::Bidding | Phase::ChoosingAlone => {
            flow.submit_bid(seat, Bid::Pass).expect("pass is always legal");
        }
        Phase::Playing => {
            let card = *legal_moves(state, seat).first().expect("a legal card");
            flow.submit_play(seat, card).expect("legal play");
        }
        other => panic!("no action in {other:?}"),
    }
    seat
}
