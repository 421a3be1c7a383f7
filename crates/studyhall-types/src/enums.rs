//! Closed, string-backed enumerations.
//!
//! Every enum is declared once as a `Variant => "Label"` table. Both the
//! label rendering and the parser are generated from that table, so adding a
//! member updates both directions together. Parsing is case-insensitive;
//! rendering always uses the canonical label.

use studyhall_core::{decode_utf8, Assignable, CodecError, Serializable};

use crate::error::TypeError;

macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// The canonical label.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }

            /// Case-insensitive exact match against the closed label set.
            pub fn parse(s: &str) -> Result<Self, TypeError> {
                $(
                    if s.eq_ignore_ascii_case($label) {
                        return Ok($name::$variant);
                    }
                )+
                Err(CodecError::UnknownLabel {
                    type_name: stringify!($name),
                    input: s.to_string(),
                }
                .into())
            }

            /// Position in declaration order.
            pub fn to_repr(self) -> i32 {
                self as i32
            }

            pub fn from_repr(value: i32) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.to_repr() == value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = TypeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl Serializable for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            type Error = TypeError;

            fn from_input(raw: &str) -> Result<Self, TypeError> {
                Self::parse(raw)
            }

            fn decode_text(src: &[u8]) -> Result<Self, TypeError> {
                Self::parse(decode_utf8(src, Self::TYPE_NAME)?)
            }

            fn encode_text(&self, buf: &mut Vec<u8>) -> Result<(), TypeError> {
                buf.extend_from_slice(self.as_str().as_bytes());
                Ok(())
            }

            fn assignable(&self) -> Assignable<'_> {
                Assignable::Text(self.as_str())
            }
        }

        studyhall_core::impl_source_value!($name);
    };
}

label_enum! {
    /// Kind of access a permission grants on a node type.
    pub enum AccessLevel {
        Connect => "Connect",
        Create => "Create",
        Delete => "Delete",
        Disconnect => "Disconnect",
        Read => "Read",
        Update => "Update",
    }
}

label_enum! {
    /// Kind of object a node id refers to.
    pub enum NodeType {
        Activity => "Activity",
        ActivityAsset => "ActivityAsset",
        Appled => "Appled",
        Comment => "Comment",
        Course => "Course",
        CourseLesson => "CourseLesson",
        Email => "Email",
        Enrolled => "Enrolled",
        Event => "Event",
        Label => "Label",
        Labeled => "Labeled",
        Lesson => "Lesson",
        Notification => "Notification",
        Study => "Study",
        Topic => "Topic",
        Topiced => "Topiced",
        User => "User",
        UserAsset => "UserAsset",
    }
}

label_enum! {
    pub enum EventType {
        CourseEvent => "CourseEvent",
        LessonEvent => "LessonEvent",
        PublicEvent => "PublicEvent",
        StudyEvent => "StudyEvent",
        UserAssetEvent => "UserAssetEvent",
    }
}

label_enum! {
    /// What happened in an event.
    pub enum EventAction {
        AddedToActivity => "AddedToActivity",
        AddedToCourse => "AddedToCourse",
        Appled => "Appled",
        Commented => "Commented",
        Created => "Created",
        Deleted => "Deleted",
        Enrolled => "Enrolled",
        Labeled => "Labeled",
        Mentioned => "Mentioned",
        Published => "Published",
        Referenced => "Referenced",
        RemovedFromActivity => "RemovedFromActivity",
        RemovedFromCourse => "RemovedFromCourse",
        Renamed => "Renamed",
        Unappled => "Unappled",
        Unenrolled => "Unenrolled",
        Unlabeled => "Unlabeled",
    }
}

label_enum! {
    pub enum CourseStatus {
        Advancing => "Advancing",
        Completed => "Completed",
    }
}

label_enum! {
    /// A user's subscription state for an enrollable.
    pub enum EnrollmentStatus {
        Enrolled => "Enrolled",
        Ignored => "Ignored",
        Unenrolled => "Unenrolled",
    }
}

label_enum! {
    pub enum EnrollableType {
        Lesson => "Lesson",
        Study => "Study",
        User => "User",
        UserAsset => "UserAsset",
    }
}

label_enum! {
    pub enum AppleableType {
        Course => "Course",
        Study => "Study",
    }
}

label_enum! {
    pub enum CommentableType {
        Lesson => "Lesson",
        UserAsset => "UserAsset",
    }
}

label_enum! {
    pub enum LabelableType {
        Comment => "Comment",
        Lesson => "Lesson",
        UserAsset => "UserAsset",
    }
}

label_enum! {
    pub enum TopicableType {
        Course => "Course",
        Study => "Study",
    }
}

label_enum! {
    /// Objects whose markdown can mention a user.
    pub enum MentionableType {
        Comment => "Comment",
        Lesson => "Lesson",
        UserAsset => "UserAsset",
    }
}

label_enum! {
    /// Objects that `#123` and `owner/name#123` references resolve to.
    pub enum ReferenceableType {
        Lesson => "Lesson",
        UserAsset => "UserAsset",
    }
}

label_enum! {
    pub enum NotificationSubject {
        Lesson => "Lesson",
        UserAsset => "UserAsset",
    }
}

label_enum! {
    /// Why a user received a notification.
    pub enum NotificationReason {
        Author => "Author",
        Comment => "Comment",
        Enrolled => "Enrolled",
        Mention => "Mention",
    }
}

label_enum! {
    pub enum EmailType {
        Backup => "Backup",
        Extra => "Extra",
        Primary => "Primary",
        Public => "Public",
    }
}
