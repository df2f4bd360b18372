use crate::ports::outbound::{CommandLine, DependencyGraphOracle, ProcessRunner};
use crate::shared::Result;

/// Placeholder replaced by the queried package name in graph command templates
pub const PACKAGE_PLACEHOLDER: &str = "{package}";

/// Default graph command: poetry's reverse dependency tree
pub const DEFAULT_GRAPH_COMMAND: &[&str] =
    &["poetry", "show", "--tree", "--why", PACKAGE_PLACEHOLDER, "--no-ansi"];

/// CommandDependencyGraph adapter - reverse-dependency lookups through an external tool
pub struct CommandDependencyGraph<R> {
    runner: R,
    template: CommandLine,
}

impl<R: ProcessRunner> CommandDependencyGraph<R> {
    /// `template` must contain `{package}` in at least one argument
    pub fn new(runner: R, template: CommandLine) -> Self {
        Self { runner, template }
    }

    /// Uses `poetry show --tree --why <package> --no-ansi`
    pub fn poetry(runner: R) -> Self {
        Self::new(
            runner,
            CommandLine::new(DEFAULT_GRAPH_COMMAND[0], DEFAULT_GRAPH_COMMAND[1..].iter().copied()),
        )
    }

    fn command_for(&self, package: &str) -> CommandLine {
        self.template.substitute(PACKAGE_PLACEHOLDER, package)
    }
}

impl<R: ProcessRunner> DependencyGraphOracle for CommandDependencyGraph<R> {
    fn describe_query(&self, package: &str) -> String {
        self.command_for(package).to_string()
    }

    fn query(&self, package: &str) -> Result<String> {
        Ok(self.runner.run(&self.command_for(package))?.stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::CommandOutput;
    use std::cell::RefCell;

    #[derive(Default)]
    struct EchoRunner {
        seen: RefCell<Vec<String>>,
    }

    impl ProcessRunner for EchoRunner {
        fn run(&self, command: &CommandLine) -> Result<CommandOutput> {
            self.seen.borrow_mut().push(command.to_string());
            Ok(CommandOutput {
                stdout: format!("{} is a direct dependency", command.args()[3]),
                stderr: String::new(),
            })
        }
    }

    #[test]
    fn test_query_substitutes_package() {
        let oracle = CommandDependencyGraph::poetry(EchoRunner::default());

        let answer = oracle.query("urllib3").unwrap();
        assert_eq!(answer, "urllib3 is a direct dependency");
        assert_eq!(
            oracle.runner.seen.borrow().as_slice(),
            &["poetry show --tree --why urllib3 --no-ansi".to_string()]
        );
    }

    #[test]
    fn test_describe_query() {
        let oracle = CommandDependencyGraph::new(
            EchoRunner::default(),
            CommandLine::new("pipdeptree", ["--reverse", "--packages", "{package}"]),
        );
        assert_eq!(
            oracle.describe_query("idna"),
            "pipdeptree --reverse --packages idna"
        );
    }
}
