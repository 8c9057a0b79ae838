use chrono::{Datelike, Local};

use voy_core::calendar::{holidays_between, next_holiday};
use voy_core::{is_portugal_holiday, portugal_holidays, Holiday};

use crate::app::AppContext;
use crate::cli::{HolidaysArgs, HolidaysSubcommand};
use crate::errors::CliError;
use crate::helpers::parse_date;
use crate::output::{
    holiday_check_json, holiday_columns, holiday_json, holiday_rows, holidays_json, print_holiday,
};
use crate::ui::{header, kv, print, table};

pub fn handle_holidays(ctx: &AppContext, args: &HolidaysArgs) -> anyhow::Result<()> {
    match &args.command {
        None => handle_list(ctx, args.year, args.json),
        Some(HolidaysSubcommand::Check { date, json }) => handle_check(ctx, date, *json),
        Some(HolidaysSubcommand::Next { after, json }) => {
            handle_next(ctx, after.as_deref(), *json)
        }
        Some(HolidaysSubcommand::Range { from, to, json }) => handle_range(ctx, from, to, *json),
    }
}

fn handle_list(ctx: &AppContext, year: Option<i32>, json: bool) -> anyhow::Result<()> {
    let year = year.unwrap_or_else(|| Local::now().year());
    let holidays = portugal_holidays(year).map_err(CliError::from)?;
    print_list(ctx, "holidays", &year.to_string(), &holidays, json)
}

fn handle_check(ctx: &AppContext, date: &str, json: bool) -> anyhow::Result<()> {
    let date = parse_date(date)?;
    let holiday = is_portugal_holiday(date);
    let ui = ctx.ui_context(json);

    if ui.mode.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&holiday_check_json(date, holiday.as_ref()))?
        );
    } else if let Some(found) = &holiday {
        print_holiday(&ui, found, ctx.language()?);
    }

    match holiday {
        Some(_) => Ok(()),
        None => Err(CliError::not_found(
            format!("{} is not a public holiday in Portugal", date),
            format!(
                "Hint: Run `voy holidays {}` to list that year's holidays.",
                date.year()
            ),
        )
        .into()),
    }
}

fn handle_next(ctx: &AppContext, after: Option<&str>, json: bool) -> anyhow::Result<()> {
    let after = match after {
        Some(value) => parse_date(value)?,
        None => Local::now().date_naive(),
    };
    let holiday = next_holiday(after).map_err(CliError::from)?;
    let ui = ctx.ui_context(json);

    if ui.mode.is_json() {
        let mut value = holiday_json(&holiday);
        value["days_until"] = serde_json::json!((holiday.date - after).num_days());
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    print_holiday(&ui, &holiday, ctx.language()?);
    let days_until = (holiday.date - after).num_days();
    print(&ui, &kv(&ui, "Days Until", &days_until.to_string()));
    Ok(())
}

fn handle_range(ctx: &AppContext, from: &str, to: &str, json: bool) -> anyhow::Result<()> {
    let from = parse_date(from)?;
    let to = parse_date(to)?;
    if from > to {
        return Err(CliError::invalid_input(format!(
            "Range start {} is after range end {}",
            from, to
        ))
        .into());
    }

    let holidays = holidays_between(from, to).map_err(CliError::from)?;
    print_list(ctx, "holidays range", &format!("{} to {}", from, to), &holidays, json)
}

fn print_list(
    ctx: &AppContext,
    command: &str,
    context: &str,
    holidays: &[Holiday],
    json: bool,
) -> anyhow::Result<()> {
    let ui = ctx.ui_context(json);

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&holidays_json(holidays))?);
        return Ok(());
    }

    if ui.mode.is_pretty() && !ctx.quiet() {
        print(&ui, &header(&ui, command, Some(context)));
    }
    let rows = holiday_rows(holidays, ctx.language()?);
    print(&ui, &table(&ui, &holiday_columns(), &rows));
    Ok(())
}
