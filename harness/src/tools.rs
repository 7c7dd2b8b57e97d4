use std::io::{BufRead, BufReader, Write};
use std::process::{ChildStdin, ChildStdout, Command, Stdio};

use rps_plus::Request;
use tracing::trace;

use crate::recording::Recorder;

/// A running referee process, driven through its stdio tool protocol.
pub struct RefereeProcess {
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
    // A re-usable buffer for IO.
    // Should always be empty before and after call().
    buf: String,
}

impl RefereeProcess {
    pub fn spawn(executable_path: &str, seed: Option<u64>) -> anyhow::Result<Self> {
        let mut command = Command::new(executable_path);
        if let Some(seed) = seed {
            command.arg("--seed").arg(seed.to_string());
        }
        let child_proc = command.stdin(Stdio::piped()).stdout(Stdio::piped()).spawn()?;

        Ok(Self {
            stdin: child_proc.stdin.expect("Could not access stdin"),
            stdout: BufReader::new(child_proc.stdout.expect("Could not access stdout")),
            buf: String::new(),
        })
    }

    /// Sends one tool call and decodes the referee's answer.
    pub fn call<T: serde::de::DeserializeOwned + std::fmt::Debug>(
        &mut self,
        recorder: &mut Option<Recorder>,
        req: &Request,
    ) -> anyhow::Result<T> {
        let req_json = serde_json::to_string(req)?;
        trace!(name: "Sending request", request = %req_json);
        self.stdin.write_all(req_json.as_bytes())?;
        self.stdin.write_all(b"\n")?;
        self.stdin.flush()?;
        self.buf.clear();
        self.stdout.read_line(&mut self.buf)?;
        let serialized_response = self.buf.trim_end();
        let response = serde_json::from_str::<T>(serialized_response)?;
        trace!(name: "Received response", response = %serialized_response);

        if let Some(recorder) = recorder {
            recorder.store_call(req_json, String::from(serialized_response));
        }
        Ok(response)
    }

    /// Sends `Bye` and hangs up. The referee exits without answering.
    pub fn shutdown(mut self) -> anyhow::Result<()> {
        let req_json = serde_json::to_string(&Request::Bye)?;
        self.stdin.write_all(req_json.as_bytes())?;
        self.stdin.write_all(b"\n")?;
        self.stdin.flush()?;
        Ok(())
    }
}
