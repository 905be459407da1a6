//! Round selection: pick the least-played active players, filling ties at random.

use crate::models::{Pick, Roster, Round};
use rand::Rng;

/// Pick the players for the next round and record the round on the roster.
///
/// 1. Sort active players by `games_played` (stable, so roster order breaks ties).
/// 2. Threshold = highest `games_played` among the first `effective_capacity()` of them.
/// 3. Everyone in that prefix strictly below the threshold is picked outright.
///    Players exactly at the threshold are not; they go into the draw.
/// 4. Remaining slots are drawn uniformly, without replacement, from every active player
///    not already picked (not just the prefix).
/// 5. Each picked player's `games_played` goes up by one; `rounds_played` goes up by one.
///
/// With no active players or a capacity of 0 the round is empty, but still counted.
pub fn pick_players<R: Rng>(roster: &mut Roster, rng: &mut R) -> Round {
    let capacity = roster.effective_capacity();

    // Indices into roster.players(), least played first.
    let mut pool: Vec<usize> = roster
        .players()
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_active())
        .map(|(i, _)| i)
        .collect();
    pool.sort_by_key(|&i| roster.players()[i].games_played);

    let threshold = pool[..capacity]
        .iter()
        .map(|&i| roster.players()[i].games_played)
        .max()
        .unwrap_or(0);

    let mut picked: Vec<usize> = pool[..capacity]
        .iter()
        .copied()
        .filter(|&i| roster.players()[i].games_played < threshold)
        .collect();
    pool.retain(|i| !picked.contains(i));
    log::debug!(
        "threshold {}: {} guaranteed, {} to draw from {} candidates",
        threshold,
        picked.len(),
        capacity - picked.len(),
        pool.len()
    );

    while picked.len() < capacity {
        let idx = rng.gen_range(0..pool.len());
        picked.push(pool.remove(idx));
    }

    let players = roster.players_mut();
    let picks: Vec<Pick> = picked
        .into_iter()
        .map(|i| {
            let p = &mut players[i];
            let games_played = p.record_play();
            log::info!("{} is playing! ({})", p.name, games_played);
            Pick {
                name: p.name.clone(),
                games_played,
            }
        })
        .collect();

    let number = roster.finish_round();
    log::info!("round {} picked {} player(s)", number, picks.len());
    Round::new(number, picks)
}
