//! `hydrogen-forge add`: generate a component or route in the current project.

use colored::Colorize;
use hf_common::project::find_project_root;
use hf_scaffold::classify::route_name_to_url_path;
use hf_scaffold::{scaffold_component, scaffold_route, ScaffoldComponentInput, ScaffoldRouteInput};
use std::path::Path;

use crate::cli::{AddArgs, AddKind};
use crate::error::{CliError, Result};
use crate::output;

pub fn run_add(cwd: &Path, args: AddArgs) -> Result<()> {
    if !cwd.join("package.json").exists() {
        let hint = match find_project_root(cwd) {
            Some(root) => format!(" ({})", root.display()),
            None => String::new(),
        };
        return Err(CliError::user(format!(
            "Not in a project directory. Run this command from your project root{hint}."
        )));
    }

    match args.kind {
        AddKind::Component => add_component(cwd, args),
        AddKind::Route => add_route(cwd, args),
    }
}

fn add_component(cwd: &Path, args: AddArgs) -> Result<()> {
    let mut input = ScaffoldComponentInput::new(&args.name);
    input.component_type = args.template_type.as_deref().map(str::parse).transpose()?;
    input.with_styles = !args.no_styles;
    if let Some(dir) = args.dir {
        input.output_dir = dir;
    }

    let result = scaffold_component(cwd, &input);
    if !result.success {
        return Err(CliError::user(result.message));
    }

    output::success(&format!("Created {} component", args.name.cyan()));
    for file in &result.files {
        output::info(&format!("Location: {}", file.path.dimmed()));
    }
    println!();
    println!("{}", "Import with:".dimmed());
    println!(
        "  {}",
        format!("import {{{0}}} from '~/components/{0}';", args.name).cyan()
    );
    Ok(())
}

fn add_route(cwd: &Path, args: AddArgs) -> Result<()> {
    if args.no_styles {
        output::warning("--no-styles only applies to components");
    }

    let mut input = ScaffoldRouteInput::new(&args.name);
    input.route_type = args.template_type.as_deref().map(str::parse).transpose()?;
    if let Some(dir) = args.dir {
        input.output_dir = dir;
    }

    let result = scaffold_route(cwd, &input);
    if !result.success {
        return Err(CliError::user(result.message));
    }

    output::success(&format!("Created {} route", args.name.cyan()));
    for file in &result.files {
        output::info(&format!("Location: {}", file.path.dimmed()));
    }
    output::info(&format!(
        "URL: {}",
        route_name_to_url_path(&args.name).dimmed()
    ));
    Ok(())
}
