use skygraph::{Airport, AirportError, Graph, GraphKind, NO_EDGE, Payload};

fn airports() -> Vec<Airport> {
    vec![
        Airport::new(100, "MEX", "MEXICO", "MEXICO CITY", "BENITO JUAREZ", -6),
        Airport::new(120, "LHR", "UNITED KINGDOM", "LONDON", "LONDON HEATHROW", 0),
        Airport::new(130, "MAD", "SPAIN", "MADRID", "MADRID-BARAJAS", 1),
    ]
}

#[test]
fn airports_are_addressed_by_id() {
    let mut g: Graph<Airport> = Graph::new(3, GraphKind::Directed).expect("graph");
    for a in airports() {
        g.add_vertex(a);
    }

    assert!(g.add_weighted_edge(&100, &120, 9.0));
    assert!(g.add_weighted_edge(&100, &130, 2.5));
    assert!(!g.add_edge(&0, &120));

    assert_eq!(g.get_weight(&100, &130), 2.5);
    assert_eq!(g.get_weight(&130, &100), NO_EDGE);

    let codes: Vec<&str> = g
        .vertex_by_key(&100)
        .expect("MEX")
        .neighbors()
        .map(|n| g.data_by_index(n.index).iata_code.as_str())
        .collect();
    assert_eq!(codes, vec!["LHR", "MAD"]);
}

#[test]
fn airport_key_is_id() {
    let a = Airport::new(150, "CDG", "FRANCE", "PARIS", "CHARLES DE GAULLE", 1);
    assert_eq!(*a.key(), 150);
    assert_eq!(a.to_string(), "CDG (PARIS, FRANCE)");
}

#[test]
fn validate_accepts_well_formed_records() {
    for a in airports() {
        assert_eq!(a.validate(), Ok(()));
    }
}

#[test]
fn validate_rejects_bad_iata_codes() {
    for code in ["", "MX", "MEXI", "M-X"] {
        let a = Airport::new(1, code, "X", "Y", "Z", 0);
        assert!(matches!(
            a.validate(),
            Err(AirportError::InvalidIataCode { id: 1, .. })
        ));
    }
}

#[test]
fn validate_rejects_long_text_fields() {
    let a = Airport::new(7, "ABC", "C", "x".repeat(65), "N", 0);
    assert_eq!(
        a.validate(),
        Err(AirportError::FieldTooLong {
            id: 7,
            field: "city",
            len: 65,
            max: 64,
        })
    );
}

#[test]
fn airport_round_trips_through_json() {
    let json = r#"{"id":140,"iata_code":"FRA","country":"GERMANY","city":"FRANKFURT","name":"FLUGHAFEN FRANKFURT AM MAIN","utc_offset":1}"#;
    let a: Airport = serde_json::from_str(json).expect("airport");
    assert_eq!(a.iata_code, "FRA");
    assert_eq!(a.utc_offset, 1);
}
