use naming::{make_unique, normalize, Alignment, Casing, NamingConfig};
use std::collections::HashSet;

fn main() {
    let titles = [
        "220 BEA EconData Employment 2010-2015",
        "BEA Econ Data: Employment, 2010-2015",
        "Median Household Income (US$) by County, 1990-2020",
    ];

    let cfg = NamingConfig {
        max_length: 24,
        alignment: Alignment::Edge,
        casing: Casing::Camel,
        ..Default::default()
    };

    let mut existing = HashSet::new();
    for title in titles {
        let candidate = normalize(title, &cfg).expect("default tables are valid");
        let unique = make_unique(&candidate, &mut existing);
        println!("{title:<52} -> {unique}");
    }
}
