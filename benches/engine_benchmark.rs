/*!
 * Engine Benchmarks
 *
 * Drain throughput of the energy queue and cycle search over large rings
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use energy_scheduler::{ProcessQueue, ResourceGraph};

fn bench_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("drain_in_order");

    for size in [100u32, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut queue = ProcessQueue::with_limits(size as usize, false);
                for pid in 0..size {
                    // Scatter energies so the heap does real work
                    let energy = ((pid as i64) * 7919) % 1_000;
                    queue.add(pid, 1, energy).ok();
                }
                black_box(queue.drain_in_order())
            });
        });
    }

    group.finish();
}

fn ring(size: u32) -> ResourceGraph {
    let mut graph = ResourceGraph::new();
    for pid in 0..size {
        graph.record_allocation(
            pid,
            [format!("R{}", pid)],
            [format!("R{}", (pid + 1) % size)],
        );
    }
    graph
}

fn chain(size: u32) -> ResourceGraph {
    let mut graph = ResourceGraph::new();
    for pid in 0..size {
        let requested: Vec<String> = if pid + 1 < size {
            vec![format!("R{}", pid + 1)]
        } else {
            Vec::new()
        };
        graph.record_allocation(pid, [format!("R{}", pid)], requested);
    }
    graph
}

fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_deadlock");

    for size in [100u32, 1_000, 10_000] {
        let cyclic = ring(size);
        group.bench_with_input(BenchmarkId::new("ring", size), &cyclic, |b, graph| {
            b.iter(|| black_box(graph.detect_deadlock()));
        });

        let acyclic = chain(size);
        group.bench_with_input(BenchmarkId::new("chain", size), &acyclic, |b, graph| {
            b.iter(|| black_box(graph.detect_deadlock()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_drain, bench_detect);
criterion_main!(benches);
