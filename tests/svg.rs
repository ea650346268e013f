use ringgauge::{Color, Gauge, GaugeConfig};

#[test]
fn test_svg_contains_track_value_and_label() {
    let config = GaugeConfig::builder()
        .radius(50.0)
        .thickness(2.0)
        .fill(Color::rgb(0x1e, 0x90, 0xff))
        .build();
    let mut gauge = Gauge::new(config).unwrap();
    gauge.set_percent(25.0).unwrap();
    let svg = gauge.to_svg();

    assert!(svg.starts_with("<svg "));
    assert!(svg.contains(r#"viewBox="-1 -1 102 102""#));
    assert!(svg.contains(r##"d="M 50 0 A 50 50 0 1 1 49.9 0" fill="none" stroke="#a9a9a9""##));
    assert!(svg.contains(r##"stroke="#1e90ff""##));
    assert!(svg.contains("M 50 0 A 50 50 0 0 1 100 "));
    assert!(svg.contains(r#"font-size="25""#));
    assert!(svg.contains(">25%</text>"));
    assert!(svg.trim_end().ends_with("</svg>"));

    // Track first, value arc second, label last.
    let track = svg.find("#a9a9a9").unwrap();
    let value = svg.find("#1e90ff").unwrap();
    let text = svg.find("<text").unwrap();
    assert!(track < value && value < text);
}
