use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::{BTreeMap, HashMap as StdHashMap};
use swiss_map::Map;

pub fn bench_associative(c: &mut Criterion) {
    let _ = env_logger::try_init();

    let mut group = c.benchmark_group("associative_collections");

    // You can easily adjust this set
    let sizes = [10, 100, 1_000, 10_000];

    //
    // swiss_map::Map
    //
    let text = "swiss_map Map";
    println!("\n{text}");
    underline(text.len());
    println!();

    for &n in &sizes {
        group.bench_with_input(format!("swissmap_insert_{n}"), &n, |b, &n| {
            b.iter(|| {
                let mut map = Map::new();
                for i in 0..n {
                    map.insert(black_box(i), black_box("value"));
                }
                black_box(map);
            })
        });

        group.bench_with_input(format!("swissmap_remove_{n}"), &n, |b, &n| {
            b.iter(|| {
                let mut map = {
                    let mut m = Map::new();
                    for i in 0..n {
                        m.insert(i, "value");
                    }
                    m
                };
                for i in 0..n {
                    black_box(map.remove(&i));
                }
            });
        });

        group.bench_with_input(format!("swissmap_search_{n}"), &n, |b, &n| {
            let mut map = Map::new();
            for i in 0..n {
                map.insert(i, "value");
            }
            b.iter(|| {
                for i in 0..n {
                    black_box(map.contains_key(&i));
                }
            })
        });
    }

    //
    // std::collections::BTreeMap
    //
    let text = "std BTreeMap";
    println!("\n{text}");
    underline(text.len());
    println!();

    for &n in &sizes {
        group.bench_with_input(format!("std_btreemap_insert_{n}"), &n, |b, &n| {
            b.iter(|| {
                let mut map = BTreeMap::new();
                for i in 0..n {
                    map.insert(black_box(i), "value");
                }
                black_box(map);
            })
        });

        group.bench_with_input(format!("std_btreemap_remove_{n}"), &n, |b, &n| {
            b.iter(|| {
                let mut map = {
                    let mut m = BTreeMap::new();
                    for i in 0..n {
                        m.insert(i, "value");
                    }
                    m
                };
                for i in 0..n {
                    black_box(map.remove(&i));
                }
            });
        });

        group.bench_with_input(format!("std_btreemap_search_{n}"), &n, |b, &n| {
            let mut map = BTreeMap::new();
            for i in 0..n {
                map.insert(i, "value");
            }
            b.iter(|| {
                for i in 0..n {
                    black_box(map.contains_key(&i));
                }
            })
        });
    }

    //
    // std::collections::HashMap
    //
    let text = "std HashMap";
    println!("\n{text}");
    underline(text.len());
    println!();

    for &n in &sizes {
        group.bench_with_input(format!("std_hashmap_insert_{n}"), &n, |b, &n| {
            b.iter(|| {
                let mut map = StdHashMap::new();
                for i in 0..n {
                    map.insert(black_box(i), "value");
                }
                black_box(map);
            })
        });

        group.bench_with_input(format!("std_hashmap_remove_{n}"), &n, |b, &n| {
            b.iter(|| {
                let mut map = {
                    let mut m = StdHashMap::new();
                    for i in 0..n {
                        m.insert(i, "value");
                    }
                    m
                };
                for i in 0..n {
                    black_box(map.remove(&i));
                }
            });
        });

        group.bench_with_input(format!("std_hashmap_search_{n}"), &n, |b, &n| {
            let mut map = StdHashMap::new();
            for i in 0..n {
                map.insert(i, "value");
            }
            b.iter(|| {
                for i in 0..n {
                    black_box(map.contains_key(&i));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_associative);
criterion_main!(benches);

fn underline(len: usize) {
    for _ in 0..len {
        print!("=");
    }
    println!();
}
