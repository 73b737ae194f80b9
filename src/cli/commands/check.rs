use anyhow::Result;

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary},
};

use crate::{core::CheckContext, issues::Issue, rules::args_order::check_args_position_issues};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.args.common)?;

    let mut all_issues: Vec<Issue> = check_args_position_issues(&ctx)
        .into_iter()
        .map(Issue::ArgsPosition)
        .collect();

    let parse_errors = ctx.parsed_files_errors();
    all_issues.extend(parse_errors.iter().cloned().map(Issue::ParseError));

    Ok(finish(
        CommandSummary::Check,
        all_issues,
        ctx.files.len(),
        true,
    ))
}
