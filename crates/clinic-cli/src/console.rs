//! Interactive menu loop.
//!
//! The console reads one answer per line. Numeric prompts re-ask on bad
//! input; end of input ends the session the same way choosing Exit does.

use std::io::{self, BufRead, Write};

use clinic_core::{Clinic, PatientId, StoreError};
use log::{debug, info};

use crate::config::Config;
use crate::gate::{AdminGate, GateOutcome};
use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Menu-driven front end over a [`Clinic`].
pub struct Console<R, W> {
    clinic: Clinic,
    config: Config,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(clinic: Clinic, config: Config, input: R, out: W) -> Self {
        Self {
            clinic,
            config,
            input,
            out,
        }
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.out, "=========Choose mode=========")?;
            writeln!(self.out, "1. Admin Mode")?;
            writeln!(self.out, "2. User Mode")?;
            writeln!(self.out, "3. Exit The system\n")?;
            let flow = match self.read_int("Enter your choice: ")? {
                None | Some(3) => Flow::Quit,
                Some(1) => self.admin_mode()?,
                Some(2) => self.user_mode()?,
                Some(_) => {
                    writeln!(self.out, "Invalid choice.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }
        writeln!(self.out, "\nGoodBye :(")?;
        self.out.flush()
    }

    // =========================================================================
    // Admin
    // =========================================================================

    fn admin_mode(&mut self) -> io::Result<Flow> {
        let mut gate = AdminGate::new(self.config.admin_code, self.config.max_password_tries);
        loop {
            let prompt = format!("Enter password (remaining tries: {}): ", gate.remaining());
            let Some(code) = self.read_int(&prompt)? else {
                return Ok(Flow::Quit);
            };
            match gate.attempt(code) {
                GateOutcome::Granted => {
                    info!("admin mode unlocked");
                    return self.admin_menu();
                }
                GateOutcome::Retry { .. } => {
                    writeln!(self.out, "Incorrect password. Try again.")?;
                }
                GateOutcome::LockedOut => {
                    writeln!(self.out, "Incorrect password. Exiting...")?;
                    return Ok(Flow::Continue);
                }
            }
        }
    }

    fn admin_menu(&mut self) -> io::Result<Flow> {
        loop {
            writeln!(self.out, "\n=========Admin  Mode=========")?;
            writeln!(self.out, "1. Add new patient record")?;
            writeln!(self.out, "2. Edit patient record")?;
            writeln!(self.out, "3. Reserve a slot with the doctor")?;
            writeln!(self.out, "4. Cancel reservation")?;
            writeln!(self.out, "5. Exit admin mode\n")?;
            let flow = match self.read_int("Enter your choice: ")? {
                None => Flow::Quit,
                Some(1) => self.add_patient()?,
                Some(2) => self.edit_patient()?,
                Some(3) => self.reserve_slot()?,
                Some(4) => self.cancel_reservation()?,
                Some(5) => return Ok(Flow::Continue),
                Some(_) => {
                    writeln!(self.out, "Invalid choice.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
    }

    fn add_patient(&mut self) -> io::Result<Flow> {
        let Some(id) = self.read_int("Enter patient ID: ")? else {
            return Ok(Flow::Quit);
        };
        // Report a duplicate before asking for the rest of the record
        if self.clinic.find_patient(id).is_ok() {
            let message = render::error_message(&StoreError::DuplicateId(id));
            writeln!(self.out, "{}", message)?;
            return Ok(Flow::Continue);
        }
        let Some((name, age, gender)) = self.read_details("")? else {
            return Ok(Flow::Quit);
        };
        match self.clinic.add_patient(id, &name, age, gender) {
            Ok(()) => writeln!(self.out, "Patient record added successfully.")?,
            Err(e) => writeln!(self.out, "{}", render::error_message(&e))?,
        }
        Ok(Flow::Continue)
    }

    fn edit_patient(&mut self) -> io::Result<Flow> {
        let Some(id) = self.read_int("Enter patient ID to edit: ")? else {
            return Ok(Flow::Quit);
        };
        if let Err(e) = self.clinic.find_patient(id) {
            writeln!(self.out, "{}", render::error_message(&e))?;
            return Ok(Flow::Continue);
        }
        let Some((name, age, gender)) = self.read_details("new ")? else {
            return Ok(Flow::Quit);
        };
        match self.clinic.edit_patient(id, &name, age, gender) {
            Ok(()) => writeln!(self.out, "Patient data updated successfully.")?,
            Err(e) => writeln!(self.out, "{}", render::error_message(&e))?,
        }
        Ok(Flow::Continue)
    }

    fn reserve_slot(&mut self) -> io::Result<Flow> {
        writeln!(self.out, "\n=======Available slots=======")?;
        for slot in self.clinic.list_available_slots() {
            writeln!(self.out, "{}. {}", slot, render::slot_label(slot))?;
        }

        let Some(patient_id) = self.read_int("Enter patient ID: ")? else {
            return Ok(Flow::Quit);
        };
        if self.clinic.find_patient(patient_id).is_err() {
            let message = render::error_message(&StoreError::PatientNotFound(patient_id));
            writeln!(self.out, "{}", message)?;
            return Ok(Flow::Continue);
        }
        let Some(slot) = self.read_int("Enter slot choice: ")? else {
            return Ok(Flow::Quit);
        };
        match self.clinic.reserve_slot(slot, patient_id) {
            Ok(_) => writeln!(self.out, "Slot reserved successfully.")?,
            Err(e) => writeln!(self.out, "{}", render::error_message(&e))?,
        }
        Ok(Flow::Continue)
    }

    fn cancel_reservation(&mut self) -> io::Result<Flow> {
        let Some(patient_id) = self.read_int("Enter patient ID to cancel reservation: ")? else {
            return Ok(Flow::Quit);
        };
        match self.clinic.cancel_reservation(patient_id) {
            Ok(_) => writeln!(self.out, "Reservation cancelled.")?,
            Err(StoreError::NotFound(_)) => {
                writeln!(self.out, "No reservation found for the given patient ID.")?
            }
            Err(e) => writeln!(self.out, "{}", render::error_message(&e))?,
        }
        Ok(Flow::Continue)
    }

    // =========================================================================
    // User
    // =========================================================================

    fn user_mode(&mut self) -> io::Result<Flow> {
        loop {
            writeln!(self.out, "\n==========User Mode==========")?;
            writeln!(self.out, "1. View patient record")?;
            writeln!(self.out, "2. View today's reservations")?;
            writeln!(self.out, "3. Exit user mode\n")?;
            match self.read_int("Enter your choice: ")? {
                None => return Ok(Flow::Quit),
                Some(1) => {
                    let Some(id) = self.read_int("Enter patient ID: ")? else {
                        return Ok(Flow::Quit);
                    };
                    self.view_patient(id)?;
                }
                Some(2) => self.view_reservations()?,
                Some(3) => return Ok(Flow::Continue),
                Some(_) => writeln!(self.out, "Invalid choice.")?,
            }
        }
    }

    fn view_patient(&mut self, id: PatientId) -> io::Result<()> {
        match self.clinic.find_patient(id) {
            Ok(patient) => write!(self.out, "{}", render::patient_record(patient)),
            Err(_) => writeln!(self.out, "Patient not found."),
        }
    }

    fn view_reservations(&mut self) -> io::Result<()> {
        match self.clinic.list_reservations() {
            Ok(reservations) => {
                writeln!(self.out, "\n====Today's  reservations====")?;
                for r in reservations {
                    writeln!(self.out, "Slot {}: Patient ID {}", r.slot, r.patient_id)?;
                }
                Ok(())
            }
            Err(e) => writeln!(self.out, "{}", render::error_message(&e)),
        }
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Next non-empty trimmed line, or `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        loop {
            write!(self.out, "{}", prompt)?;
            self.out.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("input closed");
                return Ok(None);
            }
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Ok(Some(trimmed.to_string()));
            }
        }
    }

    fn read_int(&mut self, prompt: &str) -> io::Result<Option<i32>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match line.parse() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => writeln!(self.out, "Invalid input.")?,
            }
        }
    }

    fn read_char(&mut self, prompt: &str) -> io::Result<Option<char>> {
        Ok(self
            .read_line(prompt)?
            .and_then(|line| line.chars().next()))
    }

    /// Name, age and gender prompts shared by add and edit.
    fn read_details(&mut self, qualifier: &str) -> io::Result<Option<(String, i32, char)>> {
        let Some(name) = self.read_line(&format!("Enter {}patient name: ", qualifier))? else {
            return Ok(None);
        };
        let Some(age) = self.read_int(&format!("Enter {}patient age: ", qualifier))? else {
            return Ok(None);
        };
        let gender_prompt = format!("Enter {}patient gender (M/F): ", qualifier);
        let Some(gender) = self.read_char(&gender_prompt)? else {
            return Ok(None);
        };
        Ok(Some((name, age, gender)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(script: &str) -> (String, Clinic) {
        let mut out = Vec::new();
        let clinic = {
            let mut console = Console::new(
                Clinic::new(),
                Config::default(),
                Cursor::new(script.to_string()),
                &mut out,
            );
            console.run().unwrap();
            console.clinic
        };
        (String::from_utf8(out).unwrap(), clinic)
    }

    #[test]
    fn test_exit_immediately() {
        let (out, _) = run_session("3\n");
        assert!(out.contains("=========Choose mode========="));
        assert!(out.ends_with("\nGoodBye :(\n"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let (out, _) = run_session("2\n");
        assert!(out.contains("==========User Mode=========="));
        assert!(out.ends_with("GoodBye :(\n"));
    }

    #[test]
    fn test_admin_add_and_reserve() {
        let script = "1\n1234\n1\n7\nAli\n30\nM\n3\n7\n2\n5\n3\n";
        let (out, clinic) = run_session(script);

        assert!(out.contains("Patient record added successfully."));
        assert!(out.contains("2. 2:30pm - 3:00pm"));
        assert!(out.contains("Slot reserved successfully."));
        assert_eq!(clinic.find_patient(7).unwrap().name.as_str(), "Ali");
        assert_eq!(clinic.reservations().slot_of(7).map(|s| s.number()), Some(2));
    }

    #[test]
    fn test_duplicate_reported_before_details() {
        let script = "1\n1234\n1\n7\nAli\n30\nM\n1\n7\n5\n3\n";
        let (out, _) = run_session(script);
        assert!(out.contains("Patient with ID 7 already exists."));
    }

    #[test]
    fn test_wrong_password_locks_out() {
        let (out, _) = run_session("1\n1\n2\n3\n3\n");
        assert_eq!(out.matches("Incorrect password. Try again.").count(), 2);
        assert!(out.contains("Incorrect password. Exiting..."));
        assert!(!out.contains("Admin  Mode"));
    }

    #[test]
    fn test_invalid_numeric_input_reprompts() {
        let (out, _) = run_session("abc\n9\n3\n");
        assert!(out.contains("Invalid input."));
        assert!(out.contains("Invalid choice."));
        assert!(out.ends_with("GoodBye :(\n"));
    }

    #[test]
    fn test_reserve_unknown_patient_skips_slot_prompt() {
        let (out, _) = run_session("1\n1234\n3\n42\n5\n3\n");
        assert!(out.contains("Patient with ID 42 not found."));
        assert!(!out.contains("Enter slot choice"));
    }

    #[test]
    fn test_user_views() {
        let script = "1\n1234\n1\n1\nMona\n41\nF\n3\n1\n4\n5\n2\n1\n1\n1\n2\n2\n3\n3\n";
        let (out, _) = run_session(script);

        assert!(out.contains("Patient Name: Mona\nAge: 41\nGender: F\nID: 1\n"));
        assert!(out.contains("Patient not found."));
        assert!(out.contains("====Today's  reservations====\nSlot 4: Patient ID 1\n"));
    }

    #[test]
    fn test_empty_reservation_list() {
        let (out, _) = run_session("2\n2\n3\n3\n");
        assert!(out.contains("No reservations for today."));
        assert!(!out.contains("Today's  reservations"));
    }

    #[test]
    fn test_cancel_messages() {
        let script = "1\n1234\n1\n3\nOmar\n8\nM\n3\n3\n1\n4\n3\n4\n3\n5\n3\n";
        let (out, clinic) = run_session(script);

        assert!(out.contains("Reservation cancelled."));
        assert!(out.contains("No reservation found for the given patient ID."));
        assert!(clinic.reservations().is_empty());
    }

    #[test]
    fn test_edit_long_name_rejected() {
        let script = "1\n1234\n1\n5\nSara\n22\nF\n2\n5\nAbcdefghijklmnopqrstuvwxyz\n23\nF\n5\n3\n";
        let (out, clinic) = run_session(script);

        assert!(out.contains("Name is too long (at most 19 characters)."));
        assert_eq!(clinic.find_patient(5).unwrap().name.as_str(), "Sara");
    }
}
