use clap::{Parser, Subcommand};
use tuvi_canchi::{ALL_CHIS, Chi, canchi_from_year, nap_am};
use tuvi_engine::{BirthInput, Gender, compute_chart, cuc_for, destiny_branch};

#[derive(Parser)]
#[command(name = "tuvi", about = "Tu Vi chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a full 12-palace chart from a lunar birth date
    Chart {
        /// Lunar year (e.g. 1984)
        #[arg(long)]
        year: i32,
        /// Lunar month (1-12)
        #[arg(long)]
        month: u8,
        /// Lunar day (1-30)
        #[arg(long)]
        day: u8,
        /// Birth falls in the leap repetition of the month
        #[arg(long)]
        leap: bool,
        /// Hour branch: index 0-11 or name (ty, suu, dan, mao, thin, ti, ngo, mui, than, dau, tuat, hoi)
        #[arg(long)]
        hour: String,
        /// Gender: male/nam or female/nu
        #[arg(long)]
        gender: String,
        /// Emit the chart as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Sexagenary stem-branch and nap am element for a lunar year
    CanChi {
        /// Lunar year
        year: i32,
    },
    /// Cuc (cycle number) for a year and destiny palace position
    Cuc {
        /// Lunar year
        #[arg(long)]
        year: i32,
        /// Lunar month (1-12)
        #[arg(long)]
        month: u8,
        /// Hour branch: index 0-11 or name
        #[arg(long)]
        hour: String,
    },
}

fn parse_hour(s: &str) -> Chi {
    if let Ok(idx) = s.parse::<u8>() {
        if let Some(&chi) = ALL_CHIS.get(idx as usize) {
            return chi;
        }
        eprintln!("Invalid hour index: {idx} (0-11)");
        std::process::exit(1);
    }
    match s.to_lowercase().as_str() {
        "ty" => Chi::Ty,
        "suu" => Chi::Suu,
        "dan" => Chi::Dan,
        "mao" => Chi::Mao,
        "thin" => Chi::Thin,
        "ti" => Chi::Ti,
        "ngo" => Chi::Ngo,
        "mui" => Chi::Mui,
        "than" => Chi::Than,
        "dau" => Chi::Dau,
        "tuat" => Chi::Tuat,
        "hoi" => Chi::Hoi,
        _ => {
            eprintln!("Invalid hour branch: {s}");
            eprintln!("Valid: 0-11 or ty, suu, dan, mao, thin, ti, ngo, mui, than, dau, tuat, hoi");
            std::process::exit(1);
        }
    }
}

fn parse_gender(s: &str) -> Gender {
    match s.to_lowercase().as_str() {
        "male" | "nam" | "m" => Gender::Male,
        "female" | "nu" | "f" => Gender::Female,
        _ => {
            eprintln!("Invalid gender: {s} (male/nam or female/nu)");
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Chart {
            year,
            month,
            day,
            leap,
            hour,
            gender,
            json,
        } => {
            let input = BirthInput {
                year,
                month,
                day,
                leap_month: leap,
                hour: parse_hour(&hour),
                gender: parse_gender(&gender),
            };
            let chart = compute_chart(&input).unwrap_or_else(|e| {
                eprintln!("Failed to compute chart: {e}");
                std::process::exit(1);
            });

            if json {
                let out = serde_json::to_string_pretty(&chart).unwrap_or_else(|e| {
                    eprintln!("Failed to serialize chart: {e}");
                    std::process::exit(1);
                });
                println!("{out}");
                return;
            }

            println!(
                "Nam {} {} - Ban Menh {}",
                chart.year_canchi.can.name(),
                chart.year_canchi.chi.name(),
                chart.ban_menh.name()
            );
            println!("{}", chart.cuc.name());
            println!(
                "Menh chu: {} - Than chu: {}",
                chart.menh_chu.name(),
                chart.than_chu.name()
            );
            println!(
                "Tuan: {} {} - Triet: {} {}",
                chart.tuan.0.name(),
                chart.tuan.1.name(),
                chart.triet.0.name(),
                chart.triet.1.name()
            );
            for palace in &chart.palaces {
                let body = if palace.branch.index() == chart.body_index {
                    " (Than)"
                } else {
                    ""
                };
                println!(
                    "\n{} - {} {}{}",
                    palace.role.name(),
                    palace.stem.name(),
                    palace.branch.name(),
                    body
                );
                for placed in &palace.stars {
                    println!("  {} [{}]", placed.star.name(), placed.brightness.name());
                }
            }
        }

        Commands::CanChi { year } => {
            let pillar = canchi_from_year(year);
            println!(
                "{}: {} {} - nap am {}",
                year,
                pillar.can.name(),
                pillar.chi.name(),
                nap_am(pillar).name()
            );
        }

        Commands::Cuc { year, month, hour } => {
            let menh = destiny_branch(month, parse_hour(&hour)).unwrap_or_else(|e| {
                eprintln!("Failed to locate destiny palace: {e}");
                std::process::exit(1);
            });
            let pillar = canchi_from_year(year);
            let cuc = cuc_for(pillar.can, menh);
            println!("Menh at {} - {}", menh.name(), cuc.name());
        }
    }
}
