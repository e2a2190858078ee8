use varname::{normalize, Alignment, Casing, NamingConfig};

struct Case {
    name: &'static str,
    input: &'static str,
    cfg: NamingConfig,
    expected: &'static str,
}

fn cfg(max_length: usize, remove_only: bool, alignment: Alignment, casing: Casing) -> NamingConfig {
    NamingConfig {
        max_length,
        remove_only,
        alignment,
        casing,
        ..Default::default()
    }
}

#[test]
fn golden_corpus_regression() {
    let cases = [
        Case {
            name: "defaults_snake_left",
            input: "220 BEA EconData Employment 2010-2015",
            cfg: NamingConfig::default(),
            expected: "bea_econ_data_employment_2010",
        },
        Case {
            name: "kebab_right",
            input: "220 BEA EconData Employment 2010-2015",
            cfg: cfg(20, false, Alignment::Right, Casing::Kebab),
            expected: "employment-2010-2015",
        },
        Case {
            name: "camel_edge_remove_only",
            input: "220 BEA ===EconData Employment 2010-2015",
            cfg: cfg(25, true, Alignment::Edge, Casing::Camel),
            expected: "BeaEmployment20102015",
        },
        Case {
            name: "edge_head_only_step",
            input: "aaa bbb ccc ddd",
            cfg: cfg(9, true, Alignment::Edge, Casing::Camel),
            expected: "aaaBbbDdd",
        },
        Case {
            name: "acronym_folding",
            input: "EconIndicatorNominalGDP1997China",
            cfg: cfg(40, false, Alignment::Left, Casing::Snake),
            expected: "econ_indicator_nominal_gdp_1997_china",
        },
        Case {
            name: "operators_spelled_out",
            input: "Rate <= 5% & Price != $10",
            cfg: cfg(40, false, Alignment::Left, Casing::Snake),
            expected: "rate_lte_5pct_price_ne_usd10",
        },
        Case {
            name: "punctuation_removed",
            input: "Sales (Q1), \"North\"; Region #4?",
            cfg: NamingConfig::default(),
            expected: "sales_q1_north_region_4",
        },
        Case {
            name: "stop_words_dropped",
            input: "The Cost of Living in the United States",
            cfg: NamingConfig::default(),
            expected: "cost_living_united_states",
        },
        Case {
            name: "edge_keeps_subject_and_dates",
            input: "Household Income Survey Results By County 1990 2020",
            cfg: cfg(24, false, Alignment::Edge, Casing::Kebab),
            expected: "household-income-1990-2020",
        },
    ];

    for case in cases {
        let got = normalize(case.input, &case.cfg)
            .unwrap_or_else(|e| panic!("case {} failed: {e}", case.name));
        assert_eq!(got, case.expected, "name mismatch for {}", case.name);
    }
}
