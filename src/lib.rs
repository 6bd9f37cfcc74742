pub mod configuration;

pub mod input {
    pub mod inputerror;
    pub mod integralinput;
}

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod function {
        pub mod integrand;
        pub mod fixedintegrand;
    }

    pub mod quadrature {
        pub mod quadratureerror;
        pub mod rectanglequadrature;
        pub mod simpsonquadrature;
        pub mod trapezoidalquadrature;
        pub mod quadrature;
        pub mod convergence;
    }
}

pub mod plot {
    pub mod plot;
    pub mod jsonplotter;
}

pub mod task {
    pub mod integralreport;
    pub mod integraltask;
    pub mod integraltaskmanager;
}
