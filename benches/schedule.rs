// benches/schedule.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use sidearm_scrape::{AliasTable, ScrapeContext, parse_schedule};

/// Synthetic season page: table rows plus matching enrichment cards.
fn build_page(rows: usize) -> String {
    let mut page = String::from(
        "<html><body><table>\
         <tr><th>Date</th><th>Opponent</th><th>Location</th><th>Time/Result</th></tr>",
    );
    for i in 0..rows {
        page.push_str(&format!(
            "<tr><td>Sat Sep {day}</td><td>vs.\nTeam {i}</td>\
             <td>City {i}, St. / Stadium {i}</td><td>2:30 PM CT</td></tr>",
            day = i % 28 + 1,
        ));
    }
    page.push_str("</table>");
    for i in 0..rows {
        page.push_str(&format!(
            r#"<div class="schedule-event-item-default">
              <div class="schedule-event-item-default__images">
                <img alt="Nebraska" src="https://cdn.example.com/n.svg">
                <img alt="Team {i} Mascots" data-src="https://cdn.example.com/t{i}.svg">
              </div>
              <div class="schedule-event-item-default__divider">vs.</div>
              <div class="schedule-event-item-default__opponent-name">Team {i} Mascots</div>
              <div class="schedule-event-item-bottom__link-list">
                <img alt="FOX" src="https://cdn.example.com/fox.png">
              </div>
            </div>"#,
        ));
    }
    page.push_str("</body></html>");
    page
}

fn bench_parse(c: &mut Criterion) {
    let page = build_page(14);
    let aliases = AliasTable::new();
    let today = NaiveDate::from_ymd_opt(2025, 8, 6).unwrap();

    c.bench_function("parse_schedule_14_games", |b| {
        b.iter(|| {
            let ctx = ScrapeContext { today, aliases: &aliases };
            let games = parse_schedule(black_box(&page), &ctx);
            black_box(games.len())
        })
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
