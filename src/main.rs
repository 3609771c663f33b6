//! Headless Peg Drop demo
//!
//! Owner-side glue around the physics core: builds the reference peg field
//! and pipe layout, drops seeded-random balls, applies slot payouts when a
//! ball exits, and removes exited balls between ticks.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use peg_drop::consts::{DROP_RESTITUTION, FIELD_HEIGHT, FIELD_WIDTH, MAX_BODIES};
use peg_drop::sim::{Body, Obstacle, SimParams, step};

/// Payout per landing slot, left to right
const SLOT_PAYOUTS: [i64; 7] = [100, 500, 0, 1000, 0, 500, 100];

/// Cost of dropping one ball
const DROP_COST: i64 = 100;

/// Static pegs: six rows alternating seven and six columns
fn peg_field() -> Vec<Body> {
    let mut pegs = Vec::new();
    for row in 0..6 {
        let cols = if row % 2 == 0 { 7 } else { 6 };
        let x0 = if row % 2 == 0 { 45.0 } else { 80.0 };
        for col in 0..cols {
            let x = x0 + col as f32 * 65.0;
            let y = 100.0 + row as f32 * 80.0;
            pegs.push(Body::new(x, y, 5.0, 0.0).expect("peg config is valid"));
        }
    }
    pegs
}

/// Slot divider pipes along the bottom plus side bumpers
fn obstacle_layout() -> Vec<Obstacle> {
    let mut obstacles: Vec<Obstacle> = (0..8)
        .map(|j| Obstacle::new(10.0 + j as f32 * 65.0, FIELD_HEIGHT - 80.0, 5.0, 80.0))
        .collect();

    for &y in &[70.0, 230.0, 390.0] {
        obstacles.push(Obstacle::new(0.0, y, 20.0, 30.0));
        obstacles.push(Obstacle::new(FIELD_WIDTH - 20.0, y, 20.0, 30.0));
    }
    obstacles
}

fn slot_index(x: f32) -> usize {
    let slot_width = FIELD_WIDTH / SLOT_PAYOUTS.len() as f32;
    ((x / slot_width) as usize).min(SLOT_PAYOUTS.len() - 1)
}

fn main() {
    env_logger::init();

    let mut rng = Pcg32::seed_from_u64(7);
    let params = SimParams::default();
    let obstacles = obstacle_layout();
    let mut bodies = peg_field();

    let mut money: i64 = 500;
    let dt = 1.0 / 60.0;

    log::info!("starting with {} pegs, {} obstacles", bodies.len(), obstacles.len());

    for tick in 0u32..60 * 30 {
        // drop a ball every three seconds
        if tick % 180 == 0 && bodies.len() < MAX_BODIES && money >= DROP_COST {
            let x = rng.random_range(40.0..FIELD_WIDTH - 40.0);
            let ball = Body::with_restitution(x, 40.0, 25.0, 1.0, DROP_RESTITUTION)
                .expect("ball config is valid");
            bodies.push(ball);
            money -= DROP_COST;
            log::info!("dropped ball at x={x:.1}, money now {money}");
        }

        let report = step(&params, &mut bodies, &obstacles, dt);

        for strike in &report.strikes {
            log::debug!("ball {} struck obstacle {}", strike.body, strike.obstacle);
        }

        // score and remove exited balls; reverse order keeps indices stable
        for &i in report.exited.iter().rev() {
            let slot = slot_index(bodies[i].pos.x);
            let payout = SLOT_PAYOUTS[slot];
            money += payout;
            log::info!("ball landed in slot {slot}, payout {payout}, money now {money}");
            bodies.remove(i);
        }
    }

    println!("final money: {money}");
}
