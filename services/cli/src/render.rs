use crate::commands::PickResult;
use ace_roster::roster::report::{
    PlayerView, RosterSummaryView, SalaryScatter, TeamComposition, TeamRankingEntry,
};
use ace_roster::roster::format_money;

pub(crate) fn render_players(players: &[PlayerView]) {
    if players.is_empty() {
        println!("No players match the current filters");
        return;
    }

    println!("{} player(s)", players.len());
    for player in players {
        print_player_line(player);
    }
}

fn print_player_line(player: &PlayerView) {
    println!(
        "- {} ({}, {}): salary {}, ACE {}, value {} [{}]",
        player.name,
        or_na(&player.team),
        or_na(&player.position),
        player.salary_label,
        player.ace_label,
        player.value_label,
        player.band
    );
}

pub(crate) fn render_rankings(rankings: &[TeamRankingEntry]) {
    println!("GM rankings (best value first)");
    for entry in rankings {
        println!(
            "{:>2}. {} - {}: {} player(s), average value {} [{}]",
            entry.rank, entry.owner, entry.team, entry.players, entry.mean_value_label, entry.band
        );
    }
}

pub(crate) fn render_draft(picks: &[PickResult], roster: &[PlayerView], summary: &RosterSummaryView) {
    println!("Draft picks");
    for pick in picks {
        match &pick.detail {
            Some(detail) => println!("- {}: {} ({})", pick.player, pick.outcome, detail),
            None => println!("- {}: {}", pick.player, pick.outcome),
        }
    }

    if roster.is_empty() {
        println!("\nRoster: empty");
    } else {
        println!("\nRoster");
        for player in roster {
            print_player_line(player);
        }
    }

    println!("\nRoster summary");
    println!("- Players: {}", summary.total_players);
    for entry in &summary.positions {
        println!("- {}: {}", entry.position_label, entry.count);
    }
    match summary.mean_value_band {
        Some(band) => println!("- Average value: {} [{}]", summary.mean_value_label, band),
        None => println!("- Average value: {}", summary.mean_value_label),
    }
    println!(
        "- Cap: {} used, {} remaining of {}",
        format_money(summary.cap.used),
        summary.cap.remaining_label(),
        format_money(summary.cap.salary_cap)
    );
}

pub(crate) fn render_charts(scatter: &SalaryScatter, compositions: &[TeamComposition]) {
    println!(
        "Salary vs ACE: {} point(s), axes to {} (salary) / {} (ACE)",
        scatter.points.len(),
        format_money(scatter.salary_axis_max),
        format_money(scatter.ace_axis_max)
    );

    for composition in compositions {
        println!("\n{} payroll split (current / estimated)", composition.team);
        for slice in &composition.slices {
            println!(
                "- {}: {:.1}% / {:.1}%",
                slice.player, slice.salary_share_pct, slice.ace_share_pct
            );
        }
    }
}

fn or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}
