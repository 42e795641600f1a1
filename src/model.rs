// Data model: the course catalog, payment methods and the student record.
// The catalog is the single source for both the course choices shown to
// the user and the minimum fee check done during intake.

use serde::Serialize;
use std::fmt;

/// A course offered by the school together with the lowest fee accepted
/// for it.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Course {
    pub name: &'static str,
    pub minimum_fee: u32,
}

/// Every course a student can enrol in, in the order they are offered.
pub const CATALOG: [Course; 4] = [
    Course { name: "Web development", minimum_fee: 2000 },
    Course { name: "Blockchain", minimum_fee: 5000 },
    Course { name: "App development", minimum_fee: 7000 },
    Course { name: "AI", minimum_fee: 8000 },
];

impl Course {
    /// Look a course up by its catalog name.
    pub fn by_name(name: &str) -> Option<Course> {
        CATALOG.iter().copied().find(|c| c.name == name)
    }

    /// Label used for the course selection list.
    pub fn choice_label(&self) -> String {
        format!("{} - Fees: {}", self.name, self.minimum_fee)
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    NetBanking,
    Cash,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::NetBanking,
        PaymentMethod::Cash,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DebitCard => "Debit Card",
            PaymentMethod::NetBanking => "Net Banking",
            PaymentMethod::Cash => "Cash",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Answers gathered by the intake form, before the fee rule is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentInfo {
    pub id: i64,
    pub name: String,
    pub age: u32,
    pub course: Course,
    pub fees: f64,
    pub payment_method: PaymentMethod,
}

impl StudentInfo {
    /// Minimum fee for the chosen course, read back from the catalog.
    /// A course missing from the catalog has no floor.
    pub fn required_fee(&self) -> u32 {
        Course::by_name(self.course.name)
            .map(|c| c.minimum_fee)
            .unwrap_or(0)
    }

    pub fn meets_minimum_fee(&self) -> bool {
        self.fees >= f64::from(self.required_fee())
    }

    /// Turn the answers into a student, or hand them back if the fee is
    /// below the course minimum.
    pub fn into_student(self) -> Result<Student, StudentInfo> {
        if !self.meets_minimum_fee() {
            return Err(self);
        }
        Ok(Student {
            id: self.id,
            name: self.name,
            age: self.age,
            course: self.course,
            fees: self.fees,
            payment_method: self.payment_method,
        })
    }
}

/// One enrolled learner.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub age: u32,
    pub course: Course,
    pub fees: f64,
    pub payment_method: PaymentMethod,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(course: &str, fees: f64) -> StudentInfo {
        StudentInfo {
            id: 7,
            name: "Ada".into(),
            age: 30,
            course: Course::by_name(course).unwrap(),
            fees,
            payment_method: PaymentMethod::Cash,
        }
    }

    #[test]
    fn catalog_has_expected_minimums() {
        let fees: Vec<_> = CATALOG.iter().map(|c| (c.name, c.minimum_fee)).collect();
        assert_eq!(
            fees,
            vec![
                ("Web development", 2000),
                ("Blockchain", 5000),
                ("App development", 7000),
                ("AI", 8000),
            ]
        );
    }

    #[test]
    fn unknown_course_is_not_found() {
        assert_eq!(Course::by_name("Cooking"), None);
    }

    #[test]
    fn choice_label_shows_fee() {
        assert_eq!(CATALOG[1].choice_label(), "Blockchain - Fees: 5000");
    }

    #[test]
    fn fee_below_minimum_is_returned_unchanged() {
        let rejected = info("AI", 7000.0).into_student().unwrap_err();
        assert_eq!(rejected, info("AI", 7000.0));
    }

    #[test]
    fn fee_at_minimum_is_accepted() {
        let student = info("AI", 8000.0).into_student().unwrap();
        assert_eq!(student.fees, 8000.0);
        assert_eq!(student.course.name, "AI");
        assert_eq!(student.name, "Ada");
    }

    #[test]
    fn fractional_fee_above_minimum_is_accepted() {
        let student = info("AI", 8000.5).into_student().unwrap();
        assert_eq!(student.fees, 8000.5);
    }

    #[test]
    fn negative_fee_is_rejected() {
        assert!(!info("Web development", -1.0).meets_minimum_fee());
    }

    #[test]
    fn payment_method_labels() {
        let labels: Vec<_> = PaymentMethod::ALL.iter().map(|m| m.to_string()).collect();
        assert_eq!(labels, ["Credit Card", "Debit Card", "Net Banking", "Cash"]);
    }
}
