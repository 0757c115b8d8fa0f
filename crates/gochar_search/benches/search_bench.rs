use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gochar_core::{EclipticSample, Ephemeris, ObjectId, OracleError};
use gochar_search::{CrossingConfig, StationConfig, next_crossing, next_station};
use gochar_time::UtcTime;

const OBJ: ObjectId = ObjectId(499);
const EPOCH_JD: f64 = 2_460_310.5;

/// Synthetic body with a retrograde loop, cheap enough that the bench
/// measures the search machinery rather than any ephemeris.
struct LoopingBody;

impl Ephemeris for LoopingBody {
    fn contains(&self, _object: ObjectId) -> bool {
        true
    }

    fn position_and_speed(
        &self,
        _object: ObjectId,
        jd_tdb: f64,
    ) -> Result<EclipticSample, OracleError> {
        let t = jd_tdb - EPOCH_JD;
        Ok(EclipticSample::new(
            10.0 + t + 2.0 * t.sin(),
            1.0 + 2.0 * t.cos(),
        ))
    }
}

fn crossing_bench(c: &mut Criterion) {
    let oracle = LoopingBody;
    let start = UtcTime::from_jd(EPOCH_JD);
    let config = CrossingConfig::fast_mover();

    let mut group = c.benchmark_group("search_crossing");
    group.sample_size(50);
    group.bench_function("next_crossing", |b| {
        b.iter(|| {
            next_crossing(
                black_box(&oracle),
                black_box(OBJ),
                black_box(13.0),
                black_box(&start),
                black_box(&config),
            )
            .expect("search should succeed")
            .expect("event should exist")
        })
    });
    group.finish();
}

fn station_bench(c: &mut Criterion) {
    let oracle = LoopingBody;
    let start = UtcTime::from_jd(EPOCH_JD);
    let config = StationConfig::inner_planet();

    let mut group = c.benchmark_group("search_station");
    group.sample_size(50);
    group.bench_function("next_station", |b| {
        b.iter(|| {
            next_station(
                black_box(&oracle),
                black_box(OBJ),
                black_box(&start),
                black_box(&config),
            )
            .expect("search should succeed")
            .expect("event should exist")
        })
    });
    group.finish();
}

criterion_group!(benches, crossing_bench, station_bench);
criterion_main!(benches);
