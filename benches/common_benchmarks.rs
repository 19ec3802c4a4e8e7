use std::hint::black_box;

use chain_map::HashTable;
use chain_map::LinkedList;
use chain_map::ListNode;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;

type RandomState = hashbrown::DefaultHashBuilder;
type StdMap<V> = hashbrown::HashMap<String, V, RandomState>;

const SIZES: &[usize] = &[1000];

fn keys(size: usize) -> Vec<String> {
    (0..size).map(|i| format!("key-{i}")).collect()
}

fn bench_list_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_insertion");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("prepend_to_head", size), &size, |b, &size| {
            b.iter(|| {
                let mut list = LinkedList::new();
                for i in 0..size {
                    list.prepend_to_head(ListNode::new(black_box(i)));
                }
                list
            })
        });

        group.bench_with_input(BenchmarkId::new("append_to_tail", size), &size, |b, &size| {
            b.iter(|| {
                let mut list = LinkedList::new();
                for i in 0..size {
                    list.append_to_tail(ListNode::new(black_box(i)));
                }
                list
            })
        });

        group.bench_with_input(BenchmarkId::new("extend", size), &size, |b, &size| {
            b.iter(|| {
                let mut list = LinkedList::new();
                list.extend((0..size).map(black_box));
                list
            })
        });
    }

    group.finish();
}

fn bench_list_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_algorithms");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));

        group.bench_with_input(
            BenchmarkId::new("find_delete_duplicate", size),
            &size,
            |b, &size| {
                b.iter_batched(
                    || (0..size).map(|i| i % 64).collect::<LinkedList<_>>(),
                    |mut list| list.find_delete_duplicate(),
                    criterion::BatchSize::SmallInput,
                )
            },
        );

        group.bench_with_input(BenchmarkId::new("runner_weave", size), &size, |b, &size| {
            b.iter_batched(
                || (0..size).collect::<LinkedList<_>>(),
                |mut list| {
                    list.runner_weave();
                    list
                },
                criterion::BatchSize::SmallInput,
            )
        });

        let palindrome: LinkedList<_> = (0..size / 2).chain((0..size / 2).rev()).collect();
        group.bench_with_input(BenchmarkId::new("is_palindrome", size), &size, |b, _| {
            b.iter(|| black_box(&palindrome).is_palindrome())
        });

        let list: LinkedList<_> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("find_k_to_last", size), &size, |b, &size| {
            b.iter(|| list.find_k_to_last(black_box(size / 2)).map(|node| node.data))
        });
    }

    group.finish();
}

fn bench_table_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_insertion");

    for &size in SIZES {
        let keys = keys(size);
        group.throughput(criterion::Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("chain_map", size), &size, |b, _| {
            b.iter(|| {
                let mut table = HashTable::new();
                for (i, key) in keys.iter().enumerate() {
                    table.insert_node_into_map(black_box(key), black_box(i));
                }
                table
            })
        });

        group.bench_with_input(BenchmarkId::new("hashbrown", size), &size, |b, _| {
            b.iter(|| {
                let mut map = StdMap::default();
                for (i, key) in keys.iter().enumerate() {
                    map.insert(black_box(key.clone()), black_box(i));
                }
                map
            })
        });
    }

    group.finish();
}

fn bench_table_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_lookup");

    for &size in SIZES {
        let keys = keys(size);
        group.throughput(criterion::Throughput::Elements(size as u64));

        let mut table = HashTable::new();
        let mut map = StdMap::default();
        for (i, key) in keys.iter().enumerate() {
            table.insert_node_into_map(key, i);
            map.insert(key.clone(), i);
        }

        group.bench_with_input(BenchmarkId::new("chain_map", size), &size, |b, _| {
            b.iter(|| {
                let mut sum = 0;
                for key in &keys {
                    sum += table.get(black_box(key)).copied().unwrap_or_default();
                }
                sum
            })
        });

        group.bench_with_input(BenchmarkId::new("hashbrown", size), &size, |b, _| {
            b.iter(|| {
                let mut sum = 0;
                for key in &keys {
                    sum += map.get(black_box(key.as_str())).copied().unwrap_or_default();
                }
                sum
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_list_insertion,
    bench_list_algorithms,
    bench_table_insertion,
    bench_table_lookup,
);
criterion_main!(benches);
