// UI layer: the interactive menu loop and the student intake form.
// Prompts go through the `Prompter` trait so the loop can be driven by
// `dialoguer` in the terminal or by scripted answers in tests. Everything
// the user reads is written through `Console`.

use crate::model::{PaymentMethod, Student, StudentInfo, CATALOG};
use crate::roster::{RemoveOutcome, Roster};
use anyhow::{Context, Result};
use crossterm::style::{style, Color, Stylize};
use dialoguer::{Input, Select};
use std::fmt::{Debug, Display};
use std::io::{self, Write};
use std::str::FromStr;

const FEE_WARNING: &str = "Warning: Entered fees are less than the specified fees for the course. Please enter the correct fees.";

/// Source of answers for the interactive prompts.
pub trait Prompter {
    /// Offer `items` and return the index of the chosen one.
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize>;

    /// Ask for a number. Implementations keep asking until the answer parses.
    fn number<T>(&mut self, prompt: &str) -> Result<T>
    where
        T: Clone + FromStr + Display,
        T::Err: Display + Debug;

    /// Ask for free text.
    fn text(&mut self, prompt: &str) -> Result<String>;
}

/// `Prompter` backed by `dialoguer`. `Select` is keyboard driven: arrow
/// keys to move, Enter to choose.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()
            .context("Failed to read menu selection")
    }

    fn number<T>(&mut self, prompt: &str) -> Result<T>
    where
        T: Clone + FromStr + Display,
        T::Err: Display + Debug,
    {
        Input::<T>::new()
            .with_prompt(prompt)
            .interact_text()
            .with_context(|| format!("Failed to read answer to {:?}", prompt))
    }

    fn text(&mut self, prompt: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()
            .with_context(|| format!("Failed to read answer to {:?}", prompt))
    }
}

/// Output sink for user-facing messages, optionally coloured.
pub struct Console<W: Write> {
    out: W,
    color: bool,
}

impl Console<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Console::new(io::stdout(), color)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool) -> Self {
        Console { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, color: Color, bold: bool) -> String {
        if !self.color {
            return text.to_string();
        }
        let styled = style(text).with(color);
        if bold {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }

    fn line(&mut self, text: &str, color: Color) -> Result<()> {
        let painted = self.paint(text, color, false);
        writeln!(self.out, "{}", painted)?;
        Ok(())
    }

    fn bold_line(&mut self, text: &str, color: Color) -> Result<()> {
        let painted = self.paint(text, color, true);
        writeln!(self.out, "{}", painted)?;
        Ok(())
    }

    fn student_row(&mut self, student: &Student) -> Result<()> {
        let fields = [
            (format!("ID: {}", student.id), Color::Blue),
            (format!("Name: {}", student.name), Color::Green),
            (format!("Age: {}", student.age), Color::Magenta),
            (format!("Course: {}", student.course.name), Color::Yellow),
            (format!("Fees: {}", student.fees), Color::Red),
            (format!("Payment Method: {}", student.payment_method), Color::Green),
        ];
        let row: Vec<String> = fields
            .iter()
            .map(|(text, color)| self.paint(text, *color, false))
            .collect();
        writeln!(self.out, "{}", row.join(" "))?;
        Ok(())
    }
}

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddStudent,
    RemoveStudent,
    DisplayStudents,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::AddStudent,
        MenuChoice::RemoveStudent,
        MenuChoice::DisplayStudents,
        MenuChoice::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddStudent => "Add Student",
            MenuChoice::RemoveStudent => "Remove Student",
            MenuChoice::DisplayStudents => "Display Students",
            MenuChoice::Exit => "Exit",
        }
    }

    pub fn from_index(index: usize) -> Option<MenuChoice> {
        Self::ALL.get(index).copied()
    }
}

pub fn print_banner<W: Write>(console: &mut Console<W>) -> Result<()> {
    console.bold_line("Welcome to Student Management System!", Color::Cyan)
}

/// Main interactive menu. Takes ownership of the roster, runs until the
/// user picks "Exit" and hands the roster back.
pub fn main_menu<P, W>(
    mut roster: Roster,
    prompter: &mut P,
    console: &mut Console<W>,
) -> Result<Roster>
where
    P: Prompter,
    W: Write,
{
    let items: Vec<String> = MenuChoice::ALL
        .iter()
        .map(|c| c.label().to_string())
        .collect();
    loop {
        let selection = prompter.select("What would you like to do?", &items)?;
        let Some(choice) = MenuChoice::from_index(selection) else {
            log::warn!("menu returned out of range index {}", selection);
            console.line("Invalid choice! Please enter a valid option.", Color::Red)?;
            continue;
        };
        log::debug!("menu choice: {:?}", choice);
        match choice {
            MenuChoice::AddStudent => {
                let student = collect_student(prompter, console)?;
                roster.add(student);
                console.line("Student added successfully!", Color::Green)?;
            }
            MenuChoice::RemoveStudent => {
                let id: i64 = prompter.number("Enter ID of student to remove:")?;
                report_removal(roster.remove(id), console)?;
            }
            MenuChoice::DisplayStudents => display_students(&roster, console)?,
            MenuChoice::Exit => {
                console.bold_line("Exiting...", Color::Yellow)?;
                break;
            }
        }
    }
    Ok(roster)
}

fn report_removal<W: Write>(outcome: RemoveOutcome, console: &mut Console<W>) -> Result<()> {
    match outcome {
        RemoveOutcome::Empty => {
            console.line("No students found. Cannot remove student.", Color::Yellow)
        }
        RemoveOutcome::NotFound => console.line(
            "Student not found with the provided ID. No student removed.",
            Color::Yellow,
        ),
        RemoveOutcome::Removed(_) => console.line("Student removed successfully!", Color::Green),
    }
}

fn display_students<W: Write>(roster: &Roster, console: &mut Console<W>) -> Result<()> {
    let Some(students) = roster.list() else {
        return console.line("No students found.", Color::Yellow);
    };
    console.line("List of Students:", Color::Cyan)?;
    for student in students {
        console.student_row(student)?;
    }
    Ok(())
}

/// Run the intake form until the entered fee covers the course minimum.
/// A rejected form is asked again from the first field.
pub fn collect_student<P, W>(prompter: &mut P, console: &mut Console<W>) -> Result<Student>
where
    P: Prompter,
    W: Write,
{
    loop {
        let info = ask_student_info(prompter)?;
        match info.into_student() {
            Ok(student) => return Ok(student),
            Err(info) => {
                log::warn!(
                    "rejected fee {} for {} (minimum {})",
                    info.fees,
                    info.course.name,
                    info.required_fee()
                );
                console.line(FEE_WARNING, Color::Red)?;
            }
        }
    }
}

/// Ask every intake field once, in form order.
pub fn ask_student_info<P: Prompter>(prompter: &mut P) -> Result<StudentInfo> {
    let id: i64 = prompter.number("Enter ID:")?;
    let name = prompter.text("Enter Name:")?;
    let age: u32 = prompter.number("Enter Age:")?;

    let courses: Vec<String> = CATALOG.iter().map(|c| c.choice_label()).collect();
    let course_index = prompter.select("Choose Course:", &courses)?;
    let course = *CATALOG
        .get(course_index)
        .with_context(|| format!("Course selection {} is out of range", course_index))?;

    let fees: f64 = prompter.number(&format!("Enter Fees (Course: {}):", course.name))?;

    let methods: Vec<String> = PaymentMethod::ALL
        .iter()
        .map(|m| m.label().to_string())
        .collect();
    let method_index = prompter.select("Choose Payment Method:", &methods)?;
    let payment_method = *PaymentMethod::ALL
        .get(method_index)
        .with_context(|| format!("Payment method selection {} is out of range", method_index))?;

    Ok(StudentInfo {
        id,
        name,
        age,
        course,
        fees,
        payment_method,
    })
}
