use chrono::NaiveDate;
use worklog_tool::{
    AccrualPass, AccrualStats, DayAdjustment, DayStatus, HolidayTable, PlanConfig, PlanningMode,
    ReportSummary, load_config_from_json, save_config_to_json, save_report_to_csv, selection,
};
#[cfg(feature = "sqlite")]
use worklog_tool::{ConfigStore, SqliteConfigStore};
use std::io::{self, Write};

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

fn parse_day_indexes(s: &str) -> Option<Vec<u8>> {
    if s == "none" {
        return Some(Vec::new());
    }
    s.split(',')
        .map(|part| part.trim().parse::<u8>().ok().filter(|idx| *idx <= 6))
        .collect()
}

fn render_work_day_table(config: &PlanConfig, stats: &AccrualStats) -> String {
    let headers = ["date", "day", "hours", "status", "log"];
    let mut rows: Vec<[String; 5]> = Vec::with_capacity(stats.work_days.len());
    for work_day in &stats.work_days {
        let adjustment = config.adjustments.get(&work_day.date);
        let status = match adjustment.map(|a| a.status) {
            Some(DayStatus::Off) => "off",
            Some(DayStatus::Work) => "work*",
            None => "work",
        };
        rows.push([
            work_day.date.to_string(),
            work_day.date.format("%A").to_string(),
            work_day.hours.to_string(),
            status.to_string(),
            adjustment.and_then(|a| a.log.clone()).unwrap_or_default(),
        ]);
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (ci, cell) in row.iter().enumerate() {
            if cell.len() > widths[ci] {
                widths[ci] = cell.len();
            }
        }
    }

    let mut sep = String::new();
    sep.push('+');
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let render_row = |cells: &[String]| {
        let mut line = String::new();
        line.push('|');
        for (ci, cell) in cells.iter().enumerate() {
            line.push(' ');
            line.push_str(cell);
            let pad = widths[ci].saturating_sub(cell.len());
            if pad > 0 {
                line.push_str(&" ".repeat(pad));
            }
            line.push(' ');
            line.push('|');
        }
        line
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    out.push_str(&render_row(&header_cells));
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');
    for row in &rows {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    out.push_str(&sep);
    out.push('\n');
    out
}

fn print_help() {
    println!(
        "Commands:\n  help                               Show this help\n  show                               Compute and show the current plan\n  summary                            Show the report summary (first 40 days)\n  goal <hours>                       Set the target hours\n  start <YYYY-MM-DD|none>            Set or clear the start date\n  mode <manual|automatic>            Set the planning mode\n  exclude <csv|none>                 Excluded weekdays, 0-6 with Sunday=0\n  holidays <on|off>                  Toggle holiday exclusion\n  set <date> <work|off> [overtime]   Override one day\n  log <date> <text...>               Attach a daily log to an override\n  clear <date>                       Remove a day override\n  range <from> <to> <work|off>       Paint a span of days\n  export <path>                      Write the CSV report\n  backup save <path>                 Save the configuration backup (JSON)\n  backup load <path>                 Load a configuration backup\n  store save <path>                  Save the configuration to a SQLite store\n  store load <path>                  Load the configuration from a SQLite store\n  quit|exit                          Exit"
    );
}

fn print_config(config: &PlanConfig) {
    let start = config
        .start_date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());
    let excluded = config
        .excluded_day_indexes()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    let mode = match config.mode {
        PlanningMode::Manual => "manual",
        PlanningMode::Automatic => "automatic",
    };
    println!("Goal              : {}h", config.goal);
    println!("Start date        : {}", start);
    println!("Mode              : {}", mode);
    println!("Excluded weekdays : {}", if excluded.is_empty() { "-".to_string() } else { excluded });
    println!("Exclude holidays  : {}", config.exclude_holidays);
    println!("Overrides         : {}", config.adjustments.len());
}

fn show_plan(config: &PlanConfig, holidays: &HolidayTable) {
    let stats = AccrualPass::new(config, holidays).execute();
    print_config(config);
    println!("Stats             : {}", stats.to_cli_summary());
    if !stats.work_days.is_empty() {
        println!("{}", render_work_day_table(config, &stats));
    }
}

fn main() {
    let mut config = PlanConfig::default();
    let holidays = HolidayTable::default();

    println!("Worklog Tool (CLI) - type 'help' for commands\n");
    print_config(&config);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        if stdin.read_line(&mut line).is_err() {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "show" => show_plan(&config, &holidays),
            "summary" => {
                let stats = AccrualPass::new(&config, &holidays).execute();
                println!("{}", ReportSummary::new(&stats).to_text());
            }
            "goal" => match parts.next().and_then(|s| s.parse::<u32>().ok()) {
                Some(goal) => {
                    config.goal = goal;
                    println!("Goal set to {}h.", goal);
                }
                None => println!("Usage: goal <hours>"),
            },
            "start" => match parts.next() {
                Some("none") => {
                    config.start_date = None;
                    println!("Start date cleared.");
                }
                Some(date_s) => match parse_date(date_s) {
                    Some(date) => {
                        config.start_date = Some(date);
                        println!("Start date set to {}.", date);
                    }
                    None => println!("Invalid date (YYYY-MM-DD)"),
                },
                None => println!("Usage: start <YYYY-MM-DD|none>"),
            },
            "mode" => match parts.next() {
                Some("manual") => {
                    config.mode = PlanningMode::Manual;
                    println!("Mode set to manual.");
                }
                Some("automatic") => {
                    config.mode = PlanningMode::Automatic;
                    println!("Mode set to automatic.");
                }
                _ => println!("Usage: mode <manual|automatic>"),
            },
            "exclude" => match parts.next().and_then(parse_day_indexes) {
                Some(indexes) => {
                    config.excluded_weekdays = indexes
                        .iter()
                        .filter_map(|idx| worklog_tool::config::weekday_from_index(*idx))
                        .collect();
                    println!("Excluded weekdays updated.");
                }
                None => println!("Usage: exclude <csv of 0-6|none> (Sunday=0)"),
            },
            "holidays" => match parts.next() {
                Some("on") => {
                    config.exclude_holidays = true;
                    println!("Holiday exclusion on.");
                }
                Some("off") => {
                    config.exclude_holidays = false;
                    println!("Holiday exclusion off.");
                }
                _ => println!("Usage: holidays <on|off>"),
            },
            "set" => {
                let date_s = parts.next();
                let status_s = parts.next();
                let overtime_s = parts.next();
                match (date_s.and_then(parse_date), status_s) {
                    (Some(date), Some("off")) => {
                        config.adjustments.insert(date, DayAdjustment::off());
                        println!("{} set to off.", date);
                    }
                    (Some(date), Some("work")) => {
                        let overtime = overtime_s.and_then(|s| s.parse::<u32>().ok()).unwrap_or(0);
                        config.adjustments.insert(date, DayAdjustment::worked(overtime));
                        println!("{} set to work (+{}h overtime).", date, overtime);
                    }
                    _ => println!("Usage: set <YYYY-MM-DD> <work|off> [overtime]"),
                }
            }
            "log" => {
                let date_s = parts.next();
                let rest: Vec<&str> = parts.collect();
                match (date_s.and_then(parse_date), !rest.is_empty()) {
                    (Some(date), true) => {
                        let text = rest.join(" ");
                        match config.adjustments.get_mut(&date) {
                            Some(adjustment) => adjustment.log = Some(text),
                            None => {
                                config
                                    .adjustments
                                    .insert(date, DayAdjustment::worked(0).with_log(text));
                            }
                        }
                        println!("Log set for {}.", date);
                    }
                    _ => println!("Usage: log <YYYY-MM-DD> <text...>"),
                }
            }
            "clear" => match parts.next().and_then(parse_date) {
                Some(date) => {
                    if config.adjustments.remove(&date).is_some() {
                        println!("Override for {} removed.", date);
                    } else {
                        println!("No override for {}.", date);
                    }
                }
                None => println!("Usage: clear <YYYY-MM-DD>"),
            },
            "range" => {
                let from_s = parts.next().and_then(parse_date);
                let to_s = parts.next().and_then(parse_date);
                let status = match parts.next() {
                    Some("work") => Some(DayStatus::Work),
                    Some("off") => Some(DayStatus::Off),
                    _ => None,
                };
                match (from_s, to_s, status) {
                    (Some(from), Some(to), Some(status)) => {
                        selection::paint_range(&mut config.adjustments, from, to, status);
                        println!("Range painted.");
                    }
                    _ => println!("Usage: range <from> <to> <work|off>"),
                }
            }
            "export" => match parts.next() {
                Some(path) => {
                    let stats = AccrualPass::new(&config, &holidays).execute();
                    match save_report_to_csv(path, &config, &stats) {
                        Ok(_) => println!("Report exported to {}.", path),
                        Err(e) => println!("Error exporting report: {}", e),
                    }
                }
                None => println!("Usage: export <path>"),
            },
            "backup" => match (parts.next(), parts.next()) {
                (Some("save"), Some(path)) => match save_config_to_json(&config, path) {
                    Ok(_) => println!("Backup saved to {}.", path),
                    Err(e) => println!("Error saving backup: {}", e),
                },
                (Some("load"), Some(path)) => match load_config_from_json(path) {
                    Ok(loaded) => {
                        config = loaded;
                        println!("Backup loaded from {}.", path);
                        print_config(&config);
                    }
                    Err(e) => println!("Error loading backup: {}", e),
                },
                _ => println!("Usage: backup <save|load> <path>"),
            },
            #[cfg(feature = "sqlite")]
            "store" => match (parts.next(), parts.next()) {
                (Some("save"), Some(path)) => match SqliteConfigStore::new(path)
                    .and_then(|store| store.save_config(&config))
                {
                    Ok(_) => println!("Configuration stored in {}.", path),
                    Err(e) => println!("Error saving to store: {}", e),
                },
                (Some("load"), Some(path)) => match SqliteConfigStore::new(path)
                    .and_then(|store| store.load_config())
                {
                    Ok(Some(loaded)) => {
                        config = loaded;
                        println!("Configuration loaded from {}.", path);
                        print_config(&config);
                    }
                    Ok(None) => println!("Store {} holds no configuration.", path),
                    Err(e) => println!("Error loading from store: {}", e),
                },
                _ => println!("Usage: store <save|load> <path>"),
            },
            _ => {
                println!("Unknown command. Type 'help'.");
            }
        }
    }
}
