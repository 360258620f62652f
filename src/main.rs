// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::Parser;
use preview_gen::cli::{CliArgs, Commands};
use preview_gen::shared::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    init_tracing(args.verbose);

    match args.into_command() {
        Commands::Generate(cmd) => cmd.execute(),
        Commands::Plan(cmd) => cmd.execute(),
    }
}
