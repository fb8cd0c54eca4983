use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rand::rngs::StdRng;
use rand::SeedableRng;

use entente::board::{extract_owners, synchronize, Board, BotIdentity, Nationality, UnitRecord};
use entente::orders::{generate_moves, generate_reinforcements};
use entente::scoring::score;

fn unit(province: &str, owner: &str, unit_type: &str) -> UnitRecord {
    UnitRecord {
        province: province.to_string(),
        owner: owner.to_string(),
        unit_type: unit_type.to_string(),
    }
}

/// Standard opening: 22 units across the seven powers.
fn opening_units() -> Vec<UnitRecord> {
    vec![
        unit("vie", "austria", "army"),
        unit("bud", "austria", "army"),
        unit("tri", "austria", "fleet"),
        unit("lon", "england", "fleet"),
        unit("edi", "england", "fleet"),
        unit("lvp", "england", "army"),
        unit("bre", "france", "fleet"),
        unit("par", "france", "army"),
        unit("mar", "france", "army"),
        unit("kie", "germany", "fleet"),
        unit("ber", "germany", "army"),
        unit("mun", "germany", "army"),
        unit("nap", "italy", "fleet"),
        unit("rom", "italy", "army"),
        unit("ven", "italy", "army"),
        unit("stp", "russia", "fleet"),
        unit("mos", "russia", "army"),
        unit("war", "russia", "army"),
        unit("sev", "russia", "fleet"),
        unit("ank", "turkey", "fleet"),
        unit("con", "turkey", "army"),
        unit("smy", "turkey", "army"),
    ]
}

fn synced_board(nationality: Nationality) -> (Board, BotIdentity) {
    let mut board = Board::standard();
    let mut identity = BotIdentity::new(nationality, &board);
    let snapshot = extract_owners(&opening_units());
    synchronize(&mut board, &mut identity, &snapshot);
    score(&mut board, nationality);
    (board, identity)
}

fn bench_build_standard(c: &mut Criterion) {
    c.bench_function("build_standard_board", |b| b.iter(Board::standard));
}

fn bench_score(c: &mut Criterion) {
    let (mut board, identity) = synced_board(Nationality::Austria);
    c.bench_function("score_standard_opening", |b| {
        b.iter(|| score(black_box(&mut board), identity.nationality))
    });
}

fn bench_generate_moves(c: &mut Criterion) {
    let (board, identity) = synced_board(Nationality::Russia);
    let mut rng = StdRng::seed_from_u64(42);
    c.bench_function("generate_moves_russia", |b| {
        b.iter(|| generate_moves(black_box(&board), black_box(&identity), &mut rng))
    });
}

fn bench_generate_reinforcements(c: &mut Criterion) {
    let (board, identity) = synced_board(Nationality::Austria);
    c.bench_function("generate_reinforcements_2", |b| {
        b.iter(|| {
            let mut board = board.clone();
            generate_reinforcements(black_box(&mut board), black_box(&identity), 2)
        })
    });
}

criterion_group!(
    benches,
    bench_build_standard,
    bench_score,
    bench_generate_moves,
    bench_generate_reinforcements
);
criterion_main!(benches);
