use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Accumulates the tool calls of one game and writes them out as one JSON
/// transcript file per game.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    calls: Vec<RecordedCall>,
}

struct RecordedCall {
    request: String,
    response: String,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            calls: Vec::new(),
        })
    }

    pub fn store_call(&mut self, request: String, response: String) {
        self.calls.push(RecordedCall { request, response });
    }

    // The stored request/response are already JSON strings, so the JSON is
    // written manually here; going through serde would escape them.
    pub fn write_game_recording(&mut self) -> anyhow::Result<()> {
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let mut writer = BufWriter::new(File::create(filepath)?);
        write!(writer, "[")?;
        let mut first = true;
        for call in std::mem::take(&mut self.calls).into_iter() {
            if !first {
                write!(writer, ",")?;
            } else {
                first = false;
            }
            write!(
                writer,
                "\n  {{\n    \"request\": {},\n    \"response\": {}\n  }}",
                call.request, call.response
            )?;
        }
        write!(writer, "\n]")?;
        self.num += 1;
        Ok(())
    }
}
