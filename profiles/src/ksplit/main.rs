// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use profiles::{cli, ksplit};

fn main() -> anyhow::Result<()> {
    cli::run(ksplit::DESCRIPTION, ksplit::ksplit)
}
