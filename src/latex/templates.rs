use crate::subject::Subject;

/// Shared document skeleton. Placeholders are substituted by `render`.
pub const DOCUMENT_SKELETON: &str = r"\documentclass[11pt]{article}
\usepackage[utf8]{inputenc}
\usepackage[T1]{fontenc}
\usepackage{amsmath}
\usepackage{amssymb}
\usepackage{enumitem}
\usepackage[margin=1in]{geometry}
<<EXTRA_PREAMBLE>>\usepackage{hyperref}

\title{<<TITLE>>}
\author{}
\date{<<DATE>>}

% Subject: <<SUBJECT>>
\begin{document}
\maketitle

<<BODY>>

\end{document}
";

const MATH_PREAMBLE: &str = r"\usepackage{mathtools}
\usepackage{amsthm}
\usepackage{cancel}
\newtheorem{theorem}{Theorem}
\newtheorem{lemma}{Lemma}
\theoremstyle{definition}
\newtheorem{definition}{Definition}
";

const PROGRAMMING_PREAMBLE: &str = r"\usepackage{listings}
\usepackage{xcolor}
\lstset{
  basicstyle=\ttfamily\small,
  breaklines=true,
  commentstyle=\color{gray},
  keywordstyle=\color{blue},
  showstringspaces=false,
  frame=single
}
";

const CHEMISTRY_PREAMBLE: &str = r"\usepackage[version=4]{mhchem}
";

const PHYSICS_PREAMBLE: &str = r"\usepackage{siunitx}
";

const MACHINE_LEARNING_PREAMBLE: &str = r"\usepackage{algorithm}
\usepackage{algpseudocode}
\usepackage{listings}
\lstset{
  basicstyle=\ttfamily\small,
  breaklines=true,
  showstringspaces=false
}
";

/// Subject-specific preamble added to the shared skeleton
pub fn extra_preamble(subject: Subject) -> &'static str {
    match subject {
        Subject::Math => MATH_PREAMBLE,
        Subject::Programming => PROGRAMMING_PREAMBLE,
        Subject::Chemistry => CHEMISTRY_PREAMBLE,
        Subject::Physics => PHYSICS_PREAMBLE,
        Subject::MachineLearning => MACHINE_LEARNING_PREAMBLE,
        Subject::General => "",
    }
}

/// A package name that uniquely identifies each subject's template, used to
/// verify which template a rendered document came from
pub fn signature_package(subject: Subject) -> &'static str {
    match subject {
        Subject::Math => "mathtools",
        Subject::Programming => "xcolor",
        Subject::Chemistry => "mhchem",
        Subject::Physics => "siunitx",
        Subject::MachineLearning => "algpseudocode",
        Subject::General => "amsmath",
    }
}
