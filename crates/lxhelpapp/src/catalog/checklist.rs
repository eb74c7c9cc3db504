//! The troubleshooting checklist.

use crate::model::ChecklistItem;

fn step(title: &str, description: &str, commands: &[&str], notes: &str) -> ChecklistItem {
    ChecklistItem {
        title: title.to_string(),
        description: description.to_string(),
        commands: commands.iter().map(|c| c.to_string()).collect(),
        notes: notes.to_string(),
    }
}

pub(super) fn entries() -> Vec<ChecklistItem> {
    vec![
        step(
            "Verify Package Installation",
            "Confirm that the package or application is properly installed on your system.",
            &[
                "which package-name          # Find executable location",
                "command -v package-name     # Check if command exists",
                "apt list --installed | grep package-name  # For Ubuntu/Debian",
                "dnf list installed | grep package-name    # For Fedora",
                "pacman -Q package-name      # For Arch Linux",
            ],
            "If the package is not found, install it using your distribution's package manager. \
             If installed but not found, the PATH may need updating.",
        ),
        step(
            "Check Environment Variables",
            "Verify that important environment variables are set correctly.",
            &[
                "echo $PATH                  # Show command search path",
                "echo $LD_LIBRARY_PATH       # Show library search path",
                "echo $HOME                  # Show home directory",
                "env | sort                  # List all environment variables",
                "env | grep VARIABLE_NAME    # Find specific variable",
            ],
            "If PATH is missing directories, add them temporarily with: \
             export PATH=/path/to/bin:$PATH or permanently in ~/.bashrc or ~/.zshrc",
        ),
        step(
            "Verify File Permissions",
            "Check and fix file permissions that may be preventing access or execution.",
            &[
                "ls -la file.txt             # Check file permissions",
                "ls -ld directory/           # Check directory permissions",
                "chmod +x script.sh          # Make file executable",
                "chmod 644 file.txt          # Read/write for owner, read-only for others",
                "chmod 755 directory/        # Full access for owner, read-execute for others",
            ],
            "Common issues: missing execute permission on scripts, incorrect ownership, \
             or wrong group permissions. Use sudo chown if needed.",
        ),
        step(
            "Restart Terminal or Shell",
            "Restart your shell session to apply changes to configuration files.",
            &[
                "exec bash                   # Restart bash shell",
                "exec zsh                    # Restart zsh shell",
                "source ~/.bashrc            # Reload bashrc without restarting",
                "source ~/.zshrc             # Reload zshrc without restarting",
                "exit                        # Close current shell and restart",
            ],
            "After modifying ~/.bashrc, ~/.zshrc, or other shell configuration files, \
             restart your terminal for changes to take effect.",
        ),
        step(
            "Check System Services",
            "Verify that required services are running and properly configured.",
            &[
                "sudo systemctl status service-name     # Check service status",
                "sudo systemctl start service-name      # Start service",
                "sudo systemctl restart service-name    # Restart service",
                "sudo systemctl enable service-name     # Enable on boot",
                "sudo systemctl list-units --type=service  # List all services",
            ],
            "Use systemctl for modern systems. For older systems, use: \
             sudo service service-name status or sudo /etc/init.d/service-name status",
        ),
        step(
            "Check System Logs",
            "Examine system logs to diagnose problems and understand what went wrong.",
            &[
                "journalctl -xe              # Show recent errors",
                "journalctl -u service-name  # Show logs for specific service",
                "tail -f /var/log/syslog     # Follow system log in real-time",
                "dmesg | tail -20            # Show kernel messages",
                "tail -f /var/log/auth.log   # Monitor authentication logs",
            ],
            "Check logs when applications fail. journalctl is preferred on modern systems. \
             Look for ERROR or FAILED messages for clues.",
        ),
        step(
            "Verify Disk Space",
            "Ensure you have sufficient disk space and inodes available.",
            &[
                "df -h                       # Show disk usage (human-readable)",
                "df -i                       # Show inode usage",
                "du -sh ~/                   # Show home directory size",
                "du -sh ~/* | sort -rh       # Find largest items in home",
                "lsof +D /path               # Find open files in directory",
            ],
            "If disk is 100% full, clean temporary files, old logs, or package caches. \
             Use: sudo apt clean, sudo apt autoclean",
        ),
        step(
            "Check Network Connectivity",
            "Verify network connection if the issue involves internet or local network access.",
            &[
                "ping 8.8.8.8                # Test internet connection",
                "ping google.com             # Test DNS resolution",
                "ip addr show                # Show IP addresses",
                "ifconfig                    # Show network interfaces (older systems)",
                "ss -tlnp                    # Show listening ports",
            ],
            "For service connections, check if the port is listening: \
             sudo netstat -tlnp | grep :port or use: sudo ss -tlnp | grep :port",
        ),
        step(
            "Check Library Dependencies",
            "Verify that all required shared libraries are present and accessible.",
            &[
                "ldd ./program               # Show library dependencies",
                "ldconfig -p | grep libname  # Search for library",
                "LD_LIBRARY_PATH=/path/lib ./program  # Add library path",
                "sudo ldconfig               # Update linker cache",
                "objdump -p ./program | grep NEEDED  # Show program requirements",
            ],
            "Missing libraries often show error: \"cannot open shared object file\". \
             Use ldd to identify which library is missing, then install it.",
        ),
        step(
            "Update and Upgrade System",
            "Ensure all packages are up to date, which can fix many compatibility issues.",
            &[
                "sudo apt update && sudo apt upgrade -y  # Ubuntu/Debian",
                "sudo dnf upgrade -y         # Fedora",
                "sudo pacman -Syu            # Arch Linux",
                "sudo apt autoremove         # Remove unused packages",
                "sudo apt autoclean          # Clean package cache",
            ],
            "Regular updates fix security issues and bugs. Use -y flag to answer yes automatically. \
             Run these commands regularly for system health.",
        ),
    ]
}
