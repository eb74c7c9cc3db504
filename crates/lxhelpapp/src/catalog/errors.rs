//! The error lookup page.

use crate::model::ErrorEntry;

type Step<'a> = (&'a str, &'a [&'a str]);

/// Renders steps as a numbered list with indented command lines, separated by
/// blank lines.
fn numbered(steps: &[Step<'_>]) -> String {
    steps
        .iter()
        .enumerate()
        .map(|(i, (heading, lines))| {
            let mut step = format!("{}. {}", i + 1, heading);
            for line in *lines {
                step.push_str("\n   ");
                step.push_str(line);
            }
            step
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn entry(
    error: &str,
    meaning: &str,
    causes: &[&str],
    steps: &[Step<'_>],
    example: &str,
) -> ErrorEntry {
    ErrorEntry {
        error: error.to_string(),
        meaning: meaning.to_string(),
        causes: causes.iter().map(|c| c.to_string()).collect(),
        solution: numbered(steps),
        example: (!example.is_empty()).then(|| example.to_string()),
    }
}

pub(super) fn entries() -> Vec<ErrorEntry> {
    vec![
        entry(
            "command not found",
            "The command you tried to execute does not exist or is not in your PATH.",
            &[
                "Typo in command name",
                "Program not installed",
                "Program not in PATH",
                "Using wrong shell syntax",
            ],
            &[
                ("Verify the correct command name:", &["which git"]),
                (
                    "If command doesn't exist, install it:",
                    &["sudo apt install package-name"],
                ),
                ("Check if it's in PATH:", &["echo $PATH"]),
                (
                    "Add to PATH if necessary:",
                    &["export PATH=/path/to/binary:$PATH"],
                ),
            ],
            "bash: gitt: command not found",
        ),
        entry(
            "Permission denied",
            "You do not have the required permissions to execute the file or access the resource.",
            &[
                "File is not executable",
                "Insufficient user permissions",
                "Directory permission issue",
                "Sudo required but not used",
            ],
            &[
                ("Make file executable:", &["chmod +x script.sh"]),
                ("Check file permissions:", &["ls -l file.txt"]),
                ("Use sudo if needed:", &["sudo command"]),
                (
                    "Change ownership if necessary:",
                    &["sudo chown user:group file.txt"],
                ),
            ],
            "bash: ./script.sh: Permission denied",
        ),
        entry(
            "cannot open shared object file",
            "A required shared library (.so file) cannot be found by the linker.",
            &[
                "Missing library dependency",
                "Library not in LD_LIBRARY_PATH",
                "Incompatible architecture (32-bit vs 64-bit)",
                "Library compiled for different Linux version",
            ],
            &[
                ("Find the missing library:", &["ldd ./program"]),
                (
                    "Install missing dependencies:",
                    &["sudo apt install libname-dev"],
                ),
                (
                    "Set LD_LIBRARY_PATH temporarily:",
                    &[
                        "export LD_LIBRARY_PATH=/path/to/lib:$LD_LIBRARY_PATH",
                        "./program",
                    ],
                ),
                (
                    "Check library dependencies:",
                    &["objdump -p ./program | grep NEEDED"],
                ),
            ],
            "error while loading shared libraries: libssl.so.1.1: cannot open shared object file",
        ),
        entry(
            "broken package / unmet dependencies",
            "A package requires other packages that are not installed or cannot be satisfied.",
            &[
                "Incomplete installation",
                "Repository mismatch",
                "Conflicting package versions",
                "Interrupted package manager",
            ],
            &[
                (
                    "Fix broken packages (Ubuntu/Debian):",
                    &[
                        "sudo apt --fix-broken install",
                        "sudo apt autoclean",
                        "sudo apt autoremove",
                    ],
                ),
                (
                    "For Fedora/RedHat:",
                    &["sudo dnf install --best --allowerasing"],
                ),
                (
                    "Update package lists:",
                    &["sudo apt update", "sudo apt upgrade"],
                ),
                (
                    "As last resort, remove and reinstall:",
                    &[
                        "sudo apt remove package-name",
                        "sudo apt install package-name",
                    ],
                ),
            ],
            "Some packages could not be installed. This may mean that you have requested an impossible situation.",
        ),
        entry(
            "No such file or directory",
            "The file or directory you referenced does not exist.",
            &[
                "Typo in file path",
                "File was deleted",
                "Working in wrong directory",
                "Relative vs absolute path confusion",
            ],
            &[
                ("Verify file exists:", &["ls -la /path/to/file"]),
                ("Check current directory:", &["pwd"]),
                ("Find the file:", &["find ~ -name \"filename\""]),
                (
                    "Use absolute path:",
                    &["/absolute/path/to/file", "(not ./relative/path)"],
                ),
            ],
            "No such file or directory: /home/user/nofile.txt",
        ),
        entry(
            "Operation not permitted",
            "The operation you attempted is not allowed by the system or file permissions.",
            &[
                "Insufficient permissions for operation",
                "File is in read-only filesystem",
                "Directory has restricted permissions",
                "System restrictions",
            ],
            &[
                ("Check file permissions:", &["ls -ld directory/"]),
                ("Fix permissions:", &["chmod u+w file.txt"]),
                ("Check filesystem status:", &["mount | grep -i read-only"]),
                ("Use sudo if appropriate:", &["sudo command"]),
            ],
            "Operation not permitted",
        ),
        entry(
            "disk quota exceeded",
            "You have exceeded your disk storage limit or inode quota.",
            &[
                "Home directory full",
                "Partition full",
                "Too many files created",
                "Large files in temporary directories",
            ],
            &[
                ("Check disk usage:", &["df -h", "du -sh ~/"]),
                ("Find large files:", &["du -sh ~/* | sort -rh"]),
                (
                    "Clean temporary files:",
                    &["rm -rf ~/.cache/*", "rm -rf /tmp/*"],
                ),
                ("Remove old logs:", &["sudo journalctl --vacuum=1w"]),
                ("Check quota:", &["quota -s"]),
            ],
            "disk quota exceeded",
        ),
        entry(
            "connection refused",
            "The connection to a server or service was actively refused.",
            &[
                "Service not running",
                "Wrong port number",
                "Firewall blocking connection",
                "Service not listening on interface",
            ],
            &[
                (
                    "Check if service is running:",
                    &["sudo systemctl status service-name"],
                ),
                ("Start the service:", &["sudo systemctl start service-name"]),
                (
                    "Check port is listening:",
                    &["sudo netstat -tlnp | grep :port"],
                ),
                ("Check firewall:", &["sudo iptables -L"]),
                ("Verify correct host/port:", &["telnet localhost 8080"]),
            ],
            "Connection refused",
        ),
        entry(
            "Syntax error near unexpected token",
            "Your shell script has incorrect syntax that the shell cannot parse.",
            &[
                "Missing or mismatched quotes",
                "Missing colon in if statement",
                "Incorrect bracket nesting",
                "Using wrong shell",
            ],
            &[
                ("Check script syntax:", &["bash -n script.sh"]),
                ("Use shellcheck to find errors:", &["shellcheck script.sh"]),
                (
                    "Common mistakes:",
                    &[
                        "- if [ $var = \"test\" ]; then (missing then)",
                        "- echo \"text  (missing closing quote)",
                        "- if [ ... ] { (should be ; then)",
                    ],
                ),
                ("Run with debug mode:", &["bash -x script.sh"]),
            ],
            "script.sh: line 5: syntax error: unexpected end of file",
        ),
        entry(
            "No space left on device",
            "The partition is completely full and no more data can be written.",
            &[
                "Partition full (100% usage)",
                "Inode table full",
                "Log files consuming space",
                "Large temporary files",
            ],
            &[
                ("Check disk usage:", &["df -h", "df -i"]),
                (
                    "Find and remove large files:",
                    &["find / -type f -size +1G 2>/dev/null"],
                ),
                ("Clear package cache:", &["sudo apt clean"]),
                (
                    "Remove log files:",
                    &[
                        "sudo journalctl --vacuum=10M",
                        "sudo rm -f /var/log/*.log",
                    ],
                ),
                ("Check /tmp and /var/tmp:", &["du -sh /tmp /var/tmp"]),
            ],
            "No space left on device",
        ),
    ]
}
