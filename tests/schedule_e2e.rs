// tests/schedule_e2e.rs
//
// Full pipeline over one synthetic page render carrying both layouts:
// the base table and the enrichment cards.

use chrono::NaiveDate;

use sidearm_scrape::{
    AliasTable, Marker, ScrapeContext, Site, TvNetwork, finalize, parse_schedule,
    to_canonical_json,
};

const PAGE: &str = r##"
<html>
<head><title>Football Schedule</title></head>
<body>
  <nav><table><tr><td>Home</td><td>Roster</td><td>Schedule</td><td>News</td></tr></table></nav>

  <table class="sidearm-table schedule">
    <thead>
      <tr><th>Date</th><th>Opponent</th><th>Location</th><th>Time/Result</th></tr>
    </thead>
    <tbody>
      <tr>
        <td>Sat Aug 30</td>
        <td>vs.
Colorado</td>
        <td>Lincoln, Neb. / Memorial Stadium</td>
        <td>TBA</td>
      </tr>
      <tr>
        <td>Sat Sep 6</td>
        <td>at
Colorado State</td>
        <td>Fort Collins, Colo. / Canvas Stadium</td>
        <td>2:30 PM MDT</td>
      </tr>
      <tr>
        <td>Sat Sep 13</td>
        <td>vs.
Cincinnati</td>
        <td>Kansas City, Mo. / Arrowhead Stadium</td>
        <td>7:30 PM</td>
      </tr>
      <tr><td colspan="4">Homecoming week</td></tr>
    </tbody>
  </table>

  <div class="schedule-event-list">
    <div class="schedule-event-item-default">
      <div class="schedule-event-item-default__images">
        <img alt="Nebraska Huskers" src="https://cdn.example.com/logos/nebraska.svg">
        <img alt="Colorado Buffaloes"
             src="data:image/gif;base64,R0lGOD"
             data-src="https://cdn.example.com/logos/colorado.svg">
      </div>
      <div class="schedule-event-item-default__divider">vs.</div>
      <div class="schedule-event-item-default__opponent-name">Colorado Buffaloes</div>
      <div class="schedule-event-item-default__location">Lincoln, Neb. / Memorial Stadium</div>
      <div class="schedule-event-item-bottom__link-list">
        <a href="#"><img alt="Big Ten Network" src="https://cdn.example.com/nets/btn.png"></a>
      </div>
    </div>
    <div class="schedule-event-item-default">
      <div class="schedule-event-item-default__images">
        <img alt="Nebraska Huskers" src="https://cdn.example.com/logos/nebraska.svg">
        <img alt="Cincinnati Bearcats"
             srcset="https://cdn.example.com/logos/cincinnati-480.png 1x, https://cdn.example.com/logos/cincinnati-960.png 2x">
      </div>
      <div class="schedule-event-item-default__divider">vs.</div>
      <div class="schedule-event-item-default__opponent-name">Cincinnati Bearcats</div>
      <div class="schedule-event-item-bottom__link-list">
        <a href="#"><img alt="ESPN2" src="https://cdn.example.com/nets/espn2.png"></a>
      </div>
    </div>
  </div>
</body>
</html>
"##;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 6).unwrap()
}

#[test]
fn full_pipeline_orders_and_enriches() {
    let mut aliases = AliasTable::new();
    aliases.insert("Arrowhead Stadium", "arrowhead");
    let ctx = ScrapeContext { today: today(), aliases: &aliases };

    let games = parse_schedule(PAGE, &ctx);
    let out = finalize(games, |slug| slug == "memorial-stadium-lincoln");

    assert_eq!(out.games.len(), 3);

    // chronological order
    let opponents: Vec<&str> = out.games.iter().map(|g| g.opponent_name.as_str()).collect();
    assert_eq!(opponents, ["Colorado Buffaloes", "Colorado State", "Cincinnati Bearcats"]);

    // home opener: card overlays name + logo + broadcaster, table supplies the rest
    let colorado = &out.games[0];
    assert_eq!(colorado.site, Site::Home);
    assert_eq!(colorado.matchup_marker, Marker::Vs);
    assert!(colorado.is_time_tba);
    assert_eq!(colorado.time_local, "TBA");
    assert_eq!(colorado.opponent_slug, "colorado-buffaloes");
    assert_eq!(
        colorado.opponent_logo_url.as_deref(),
        Some("https://cdn.example.com/logos/colorado.svg")
    );
    assert_eq!(colorado.tv_network, Some(TvNetwork::Btn));
    assert_eq!(colorado.venue_slug, "memorial-stadium-lincoln");
    assert_eq!(colorado.weekday.as_deref(), Some("SATURDAY"));
    // TBA still sorts: placeholder noon timestamp on the resolved date
    assert_eq!(
        colorado.date_timestamp,
        NaiveDate::from_ymd_opt(2025, 8, 30).unwrap().and_hms_opt(12, 0, 0)
    );

    // road game: no card matched, table values pass through untouched
    let csu = &out.games[1];
    assert_eq!(csu.site, Site::Away);
    assert_eq!(csu.matchup_marker, Marker::At);
    assert_eq!(csu.time_local, "2:30 PM MDT");
    assert_eq!(
        csu.date_timestamp,
        NaiveDate::from_ymd_opt(2025, 9, 6).unwrap().and_hms_opt(14, 30, 0)
    );
    assert_eq!(csu.venue_slug, "canvas-stadium-fort-collins");
    assert_eq!(csu.opponent_logo_url, None);

    // neutral-site game: "vs." away from the home city; alias keys the venue
    let cincy = &out.games[2];
    assert_eq!(cincy.site, Site::Neutral);
    assert_eq!(cincy.venue_slug, "arrowhead");
    assert_eq!(cincy.tv_network, Some(TvNetwork::Espn2));
    assert_eq!(
        cincy.opponent_logo_url.as_deref(),
        Some("https://cdn.example.com/logos/cincinnati-480.png")
    );

    // derived sets: sorted, deduped, missing = needed minus existing assets
    assert_eq!(
        out.venues_needed,
        ["arrowhead", "canvas-stadium-fort-collins", "memorial-stadium-lincoln"]
    );
    assert_eq!(out.venues_missing, ["arrowhead", "canvas-stadium-fort-collins"]);
}

#[test]
fn identical_input_yields_identical_output() {
    let aliases = AliasTable::new();
    let ctx = ScrapeContext { today: today(), aliases: &aliases };

    let a = finalize(parse_schedule(PAGE, &ctx), |_| false);
    let b = finalize(parse_schedule(PAGE, &ctx), |_| false);
    assert_eq!(a.games, b.games);
    assert_eq!(
        to_canonical_json(&a.games).unwrap(),
        to_canonical_json(&b.games).unwrap()
    );
}

#[test]
fn tba_consistency_holds_across_the_page() {
    let aliases = AliasTable::new();
    let ctx = ScrapeContext { today: today(), aliases: &aliases };
    for g in parse_schedule(PAGE, &ctx) {
        assert_eq!(g.is_time_tba, g.time_local == "TBA");
    }
}

#[test]
fn unrecognized_layout_is_empty_not_an_error() {
    let aliases = AliasTable::new();
    let ctx = ScrapeContext { today: today(), aliases: &aliases };
    let games = parse_schedule("<html><body><p>offseason</p></body></html>", &ctx);
    assert!(games.is_empty());

    let out = finalize(games, |_| false);
    assert!(out.venues_needed.is_empty());
    assert!(out.venues_missing.is_empty());
}
