use std::process::Command;
use vergen::EmitBuilder;

fn main() {
    // Check if we're in a git repository; release tarballs and vendored
    // builds are not, and must still produce a binary.
    let is_git_available = Command::new("git")
        .args(["rev-parse", "--git-dir"])
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false);

    // Generate build-time metadata based on git availability
    let result = if is_git_available {
        EmitBuilder::builder()
            .build_timestamp()
            .git_sha(true) // short SHA
            .emit()
    } else {
        // No git, build without git metadata
        EmitBuilder::builder().build_timestamp().emit()
    };

    result.expect("Unable to generate build metadata");
}
