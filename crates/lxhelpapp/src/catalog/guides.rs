//! Sections of the terminal and installation guides.

use crate::model::AccordionItem;

fn section(title: &str, summary: &str, body: &str, code: &[&str]) -> AccordionItem {
    AccordionItem {
        title: title.to_string(),
        summary: summary.to_string(),
        body: body.to_string(),
        code: (!code.is_empty()).then(|| code.join("\n")),
    }
}

pub(super) fn terminal() -> Vec<AccordionItem> {
    vec![
        section(
            "Common Shells",
            "Bash, Zsh, Fish and POSIX sh compared",
            "Bash is the default on most distributions and good for scripting. \
             Zsh adds better autocomplete and themes. Fish has friendly defaults but a \
             different syntax. sh is the minimal POSIX shell used for portable system scripts.",
            &[],
        ),
        section(
            "Check and Change Shell",
            "Find out which shell you are using and switch to another",
            "",
            &[
                "# Check current shell",
                "echo $SHELL",
                "",
                "# List available shells",
                "cat /etc/shells",
                "",
                "# Change shell to bash",
                "chsh -s /bin/bash",
                "",
                "# Change shell to zsh",
                "chsh -s /bin/zsh",
            ],
        ),
        section(
            "Essential Navigation Commands",
            "pwd, ls and cd for moving around the filesystem",
            "Shortcuts: ~ is your home directory, . the current one, .. the parent and / the root.",
            &[
                "# Print current directory",
                "pwd",
                "",
                "# List directory contents",
                "ls -l  # Long format with details",
                "ls -la # Include hidden files",
                "",
                "# Change directory",
                "cd ~   # Go to home directory",
                "cd -   # Go to previous directory",
                "cd ..  # Go to parent directory",
                "",
                "# Show directory tree",
                "tree -L 2  # Limit depth to 2 levels",
            ],
        ),
        section(
            "Creating and Removing",
            "mkdir, touch, rm and rmdir",
            "",
            &[
                "# Create directory",
                "mkdir -p path/to/nested/directory  # Create parent directories",
                "",
                "# Create file (empty)",
                "touch file.txt",
                "",
                "# Remove file",
                "rm file.txt",
                "",
                "# Remove directory with contents",
                "rm -r directory_name",
            ],
        ),
        section(
            "Copying and Moving",
            "cp and mv for files and directories",
            "",
            &[
                "# Copy file",
                "cp source.txt destination.txt",
                "",
                "# Copy directory",
                "cp -r source_dir destination_dir",
                "",
                "# Move or rename",
                "mv old_name.txt new_name.txt",
            ],
        ),
        section(
            "Viewing File Contents",
            "cat, less, head and tail",
            "",
            &[
                "# View entire file",
                "cat -n file.txt",
                "",
                "# View in pager (paginated)",
                "less file.txt",
                "",
                "# View first/last lines",
                "head -n 20 file.txt",
                "tail -f log.txt   # Follow file changes in real-time",
            ],
        ),
        section(
            "Changing Permissions",
            "chmod in symbolic and numeric notation",
            "Permission values: r (read) = 4, w (write) = 2, x (execute) = 1.",
            &[
                "# Symbolic notation",
                "chmod u+x file.txt        # Add execute for user",
                "chmod o-r file.txt        # Remove read for others",
                "",
                "# Numeric notation",
                "chmod 644 file.txt        # rw-r--r--",
                "chmod 755 script.sh       # rwxr-xr-x",
                "chmod 600 secret.txt      # rw-------",
                "",
                "# Recursive for directories",
                "chmod -R 755 directory/",
            ],
        ),
        section(
            "Changing Ownership",
            "chown for users and groups",
            "",
            &[
                "# Change owner",
                "sudo chown newuser file.txt",
                "",
                "# Change both",
                "sudo chown newuser:newgroup file.txt",
                "",
                "# Recursive",
                "sudo chown -R user:group directory/",
            ],
        ),
        section(
            "Output Redirection",
            "Send stdout and stderr to files or discard them",
            "",
            &[
                "# Redirect stdout to file (overwrite)",
                "command > output.txt",
                "",
                "# Redirect stdout to file (append)",
                "command >> output.txt",
                "",
                "# Redirect both stdout and stderr",
                "command > output.txt 2>&1",
                "",
                "# Discard output",
                "command > /dev/null",
            ],
        ),
        section(
            "Pipelines",
            "Chain commands with the pipe operator",
            "",
            &[
                "# Pipe output of one command as input to another",
                "ls | grep .txt",
                "",
                "# Multiple pipes",
                "cat file.txt | grep pattern | sort | uniq",
                "",
                "du -sh * | sort -rh                # Largest directories",
            ],
        ),
        section(
            "Variables and Command Substitution",
            "Set, export and capture values in the shell",
            "",
            &[
                "# Set and use a variable",
                "MY_PATH=/usr/local/bin",
                "echo ${MY_PATH}",
                "",
                "# Environment variables (available to all processes)",
                "export MY_VAR='value'",
                "",
                "# Command substitution",
                "CURRENT_DATE=$(date +%Y-%m-%d)",
            ],
        ),
        section(
            "Wildcards and Globbing",
            "Match file names with *, ? and brackets",
            "",
            &[
                "ls *.txt           # All txt files",
                "ls file?.txt       # file1.txt, fileA.txt, etc",
                "ls file[1-3].txt   # file1.txt, file2.txt, file3.txt",
                "ls file[!0].txt    # All except file0.txt",
            ],
        ),
        section(
            "Command History",
            "Re-run and search earlier commands",
            "",
            &[
                "# View history",
                "history",
                "",
                "# Run previous command",
                "!!",
                "",
                "# Clear history",
                "history -c",
            ],
        ),
        section(
            "Shell Safety",
            "Avoid destructive mistakes",
            "Never run rm -rf / or dd onto a disk you have not double-checked. In scripts, \
             set -e exits on the first failure and set -u exits on undefined variables.",
            &[
                "# Use --dry-run if available",
                "rsync --dry-run -av source/ dest/",
                "",
                "# Interactive, ask before delete",
                "rm -i file.txt",
                "",
                "# Fail fast in scripts",
                "set -euo pipefail",
            ],
        ),
    ]
}

pub(super) fn installation() -> Vec<AccordionItem> {
    vec![
        section(
            "Update Package Lists (APT)",
            "Refresh the apt cache on Ubuntu and Debian",
            "Always update the package manager's cache before installing software.",
            &["sudo apt update", "sudo apt upgrade -y"],
        ),
        section(
            "Installing Packages (APT)",
            "Install one or many packages with apt",
            "Use sudo for system-wide installs. Avoid sudo with user-level package \
             managers such as pip or npm.",
            &[
                "# Install a single package",
                "sudo apt install git",
                "",
                "# Install multiple packages",
                "sudo apt install build-essential git curl wget vim",
                "",
                "# Install without confirmation",
                "sudo apt install -y nodejs npm",
            ],
        ),
        section(
            "Installing Packages (DNF)",
            "Fedora and RedHat with dnf or yum",
            "DNF replaces YUM on current Fedora releases.",
            &[
                "sudo dnf check-update",
                "sudo dnf install git",
                "",
                "# YUM syntax (for older systems)",
                "sudo yum install package-name",
            ],
        ),
        section(
            "Installing Packages (Pacman)",
            "Arch Linux with pacman",
            "-S syncs/installs, -y refreshes the database, -u upgrades packages.",
            &[
                "sudo pacman -Syu",
                "sudo pacman -S base-devel git curl python nodejs npm",
                "",
                "# Remove installation cache",
                "sudo pacman -Sc",
            ],
        ),
        section(
            "Using AUR (Arch User Repository)",
            "Install yay for AUR packages",
            "",
            &[
                "# Install from AUR",
                "yay -S package-name",
                "",
                "# Update all packages including AUR",
                "yay -Syu",
            ],
        ),
        section(
            "Installing from Source",
            "configure, make, make install",
            "Only compile from source if you need a specific version or custom features. \
             Pre-built packages are usually safer and faster.",
            &[
                "# 1. Download and extract",
                "wget https://example.com/package-1.0.tar.gz",
                "tar xzf package-1.0.tar.gz",
                "cd package-1.0",
                "",
                "# 2. Configure, compile, install",
                "./configure",
                "make",
                "sudo make install",
            ],
        ),
        section(
            "Build Dependencies",
            "Compilers and headers per distribution",
            "",
            &[
                "# Ubuntu/Debian",
                "sudo apt install build-essential",
                "",
                "# Fedora/RedHat",
                "sudo dnf install @development-tools",
                "",
                "# Arch",
                "sudo pacman -S base-devel",
            ],
        ),
        section(
            "Setting Environment Variables",
            "PATH, LD_LIBRARY_PATH and HOME, temporarily or permanently",
            "PATH lists where executables are found, LD_LIBRARY_PATH where shared \
             libraries are found.",
            &[
                "# Current session only",
                "export PATH=/usr/local/bin:$PATH",
                "",
                "# Permanently, for bash",
                "echo 'export PATH=/usr/local/bin:$PATH' >> ~/.bashrc",
                "source ~/.bashrc",
            ],
        ),
        section(
            "Verifying Installation",
            "Check that a package is installed and which version",
            "",
            &[
                "which git",
                "command -v python3",
                "apt list --installed | grep git",
                "",
                "# Most packages support --version",
                "git --version",
            ],
        ),
        section(
            "Using sudo Safely",
            "Elevated privileges without breaking the system",
            "Only use sudo when necessary. Never edit /etc/sudoers directly.",
            &[
                "# View sudo privileges",
                "sudo -l",
                "",
                "# Edit sudoers file (SAFE WAY)",
                "sudo visudo",
            ],
        ),
    ]
}
