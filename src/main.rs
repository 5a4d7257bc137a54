use swiss_map::{Map, Set};

fn main() {
    println!("\x1b[1;34mMap basics\x1b[0m");
    let mut ages: Map<String, u32> = Map::new();
    ages.insert("alice".to_string(), 30);
    ages.insert("bob".to_string(), 25);
    println!("alice is {:?}", ages.get("alice"));
    if let Some(age) = ages.get_mut("bob") {
        *age += 1;
    }
    println!("bob is now {:?}", ages.get("bob"));
    ages.remove("alice");
    println!("alice present after remove: {}", ages.contains_key("alice"));
    println!("len: {}, capacity: {}", ages.len(), ages.capacity());

    println!("\n\x1b[1;34mGrowth\x1b[0m");
    let mut counts: Map<u32, u32> = Map::with_capacity(4);
    let starting_capacity = counts.capacity();
    for n in 0..100 {
        counts.mut_val_or(n % 7, |v| *v += 1, 0);
    }
    println!(
        "started at capacity {}, grew to {} holding {} entries",
        starting_capacity,
        counts.capacity(),
        counts.len()
    );

    println!("\n\x1b[1;34mSet algebra\x1b[0m");
    let mut morning: Set<&str> = Set::new();
    for item in ["coffee", "oatmeal", "walk"] {
        morning.insert(item);
    }
    let mut evening: Set<&str> = Set::new();
    for item in ["walk", "reading", "coffee"] {
        evening.insert(item);
    }

    let mut both: Vec<&&str> = morning.intersection(&evening).collect();
    both.sort();
    println!("done both morning and evening: {:?}", both);

    let mut only_morning: Vec<&&str> = morning.difference(&evening).collect();
    only_morning.sort();
    println!("morning-only: {:?}", only_morning);

    let mut everything: Vec<&&str> = morning.union(&evening).collect();
    everything.sort();
    println!("everything: {:?}", everything);
}
