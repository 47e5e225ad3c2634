use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use cinema_booking::models::TimeOfDay;
use cinema_booking::services::{EarliestFirstQueue, HighestPriorityQueue, SeatIndex};

// Перемешанный порядок мест, чтобы дерево не вырождалось
fn scrambled_seats(count: u32) -> Vec<u32> {
    (0..count).map(|i| (i * 7919) % count).collect()
}

fn seat_index(c: &mut Criterion) {
    let ids = scrambled_seats(1024);

    c.bench_function("seat_index/add_1024", |b| {
        b.iter(|| {
            let mut index = SeatIndex::new();
            for &id in &ids {
                let _ = index.add(black_box(id));
            }
            index
        })
    });

    c.bench_function("seat_index/book_and_cancel", |b| {
        b.iter_batched(
            || {
                let mut index = SeatIndex::new();
                for &id in &ids {
                    let _ = index.add(id);
                }
                index
            },
            |mut index| {
                for &id in ids.iter().step_by(3) {
                    let _ = index.book(id);
                    let _ = index.cancel(id);
                }
                index
            },
            BatchSize::SmallInput,
        )
    });
}

fn queues(c: &mut Criterion) {
    c.bench_function("schedule/insert_extract_1440", |b| {
        b.iter(|| {
            let mut schedule = EarliestFirstQueue::new();
            for minutes in (0..1440u16).rev() {
                if let Ok(time) = TimeOfDay::from_minutes(minutes) {
                    schedule.insert("screening", time);
                }
            }
            while let Ok(item) = schedule.extract_min() {
                black_box(item);
            }
        })
    });

    c.bench_function("requests/insert_extract_1000", |b| {
        b.iter(|| {
            let mut requests = HighestPriorityQueue::new();
            for age in 0..1000i64 {
                requests.insert("customer", black_box((age * 37) % 101));
            }
            while let Ok(request) = requests.extract_max() {
                black_box(request);
            }
        })
    });
}

criterion_group!(benches, seat_index, queues);
criterion_main!(benches);
